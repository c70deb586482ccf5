//! Repository and notifier trait definitions.
//!
//! These traits define the seams `UserService` depends on, enabling
//! dependency injection and testability through mocking.

use serde::{Deserialize, Serialize};

use crate::error::UserError;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Trait for user storage operations.
///
/// Implementations must be thread-safe (`Send + Sync`) so a service can be
/// shared via `Arc`.
pub trait UserRepository: Send + Sync {
    /// Insert or replace a user.
    fn save(&self, user: &User) -> Result<(), UserError>;

    /// Look up a user by ID.
    fn find_by_id(&self, id: u64) -> Result<User, UserError>;

    /// Backend name, used for logging.
    fn name(&self) -> &'static str;
}

/// Trait for sending a message to a user.
pub trait UserNotifier: Send + Sync {
    fn notify(&self, user: &User, message: &str) -> Result<(), UserError>;
}
