//! DashMap-based in-memory user repository.
//!
//! Provides lock-free concurrent access to users keyed by ID.

use dashmap::DashMap;
use tracing::debug;

use crate::error::UserError;

use super::traits::{User, UserRepository};

/// DashMap-based implementation of `UserRepository`.
pub struct InMemoryUserRepository {
    users: DashMap<u64, User>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&self, user: &User) -> Result<(), UserError> {
        debug!("Saving user {} in memory", user.id);
        self.users.insert(user.id, user.clone());
        Ok(())
    }

    fn find_by_id(&self, id: u64) -> Result<User, UserError> {
        self.users
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(UserError::NotFound(id))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
