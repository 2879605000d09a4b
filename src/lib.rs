//! # Marquee Core
//!
//! Core business logic and domain models for the Marquee booking dashboard.
//!
//! This crate provides the fundamental types and operations behind the
//! dashboard's views (the users table with its search and pagination, the
//! click-to-advance kanban board, and the demo datasets the stat cards and
//! booking calendar read from) without any dependency on specific UI
//! implementations.
//!
//! Every operation is a pure state transformation: given the current state
//! and an input event, produce the next state. Engines never retain state
//! between calls, so the presentation layer owns the single source of truth
//! and re-renders from whatever a call returns.

pub mod domain;
pub mod error;

// Re-export commonly used types
pub use domain::{
    board::{Advance, Board, Card, CardId, ColumnKind},
    query::{PageView, UserQuery},
    user::{Directory, User, UserId},
};
pub use error::{MarqueeError, Result};
