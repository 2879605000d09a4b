pub mod board;
pub mod metrics;
pub mod query;
pub mod schedule;
pub mod user;

pub use board::{Advance, Board, Card, CardId, ColumnKind};
pub use metrics::{StatCard, TicketPoint};
pub use query::{filter_users, paginate, PageView, UserQuery};
pub use schedule::Event;
pub use user::{validate_new_user, Directory, User, UserId};
