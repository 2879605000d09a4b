use crate::error::{MarqueeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(u64);

impl UserId {
    /// Creates a UserId from a raw counter value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single row in the users table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// In-memory user collection backing the users table.
///
/// Ids are allocated from a monotonic counter and never reused, so a
/// deleted user's id stays dead for the lifetime of the process. Insertion
/// order is preserved for stable display.
///
/// All mutating operations are functional updates: they return a new
/// `Directory` and leave `self` untouched, which is what lets the
/// presentation layer swap whole states on each event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    pub users: Vec<User>,
    next_user_number: u64,
}

impl Directory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_user_number: 1,
        }
    }

    /// The demo dataset the dashboard ships with
    pub fn demo() -> Self {
        Self {
            users: vec![
                User::new(UserId::new(1), "Ravi", "ravi@gmail.com"),
                User::new(UserId::new(2), "Sita", "sita@gmail.com"),
                User::new(UserId::new(3), "Amit", "amit@gmail.com"),
                User::new(UserId::new(4), "John", "john@gmail.com"),
            ],
            next_user_number: 5,
        }
    }

    /// Appends a new user with a freshly allocated id.
    ///
    /// The collection is not re-sorted and no paging state is touched.
    /// Blank-input rejection is the caller's job (see [`validate_new_user`]);
    /// this accepts whatever strings it is handed.
    pub fn add_user(&self, name: impl Into<String>, email: impl Into<String>) -> (Self, UserId) {
        let id = UserId::new(self.next_user_number);
        let mut next = self.clone();
        next.users.push(User::new(id, name, email));
        next.next_user_number += 1;
        (next, id)
    }

    /// Removes the user with the given id.
    ///
    /// Unknown ids are a silent no-op, not an error. The caller may end up
    /// viewing an empty page afterwards; that is a valid "no rows" state.
    pub fn delete_user(&self, id: UserId) -> Self {
        let mut next = self.clone();
        next.users.retain(|u| u.id != id);
        next
    }

    /// Looks up a user by id
    pub fn get(&self, id: UserId) -> Result<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(MarqueeError::UserNotFound(id.value()))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks the inputs for a new user before they reach [`Directory::add_user`].
///
/// The engine itself accepts any strings; the collaborator collecting
/// name/email is expected to call this first and surface the error.
pub fn validate_new_user(name: &str, email: &str) -> Result<()> {
    if name.is_empty() {
        return Err(MarqueeError::EmptyInput { field: "name" });
    }
    if email.is_empty() {
        return Err(MarqueeError::EmptyInput { field: "email" });
    }
    Ok(())
}
