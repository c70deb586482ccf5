//! Placeholder SQL repositories.
//!
//! Neither type talks to a database: `save` only logs and `find_by_id`
//! fabricates a user tagged with the backend name.

use tracing::info;

use crate::error::UserError;

use super::traits::{User, UserRepository};

/// Stub standing in for a Postgres-backed repository.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresUserRepository;

impl UserRepository for PostgresUserRepository {
    fn save(&self, user: &User) -> Result<(), UserError> {
        info!("Saving user in Postgres: {}", user.name);
        Ok(())
    }

    fn find_by_id(&self, id: u64) -> Result<User, UserError> {
        Ok(User::new(id, "From Postgres"))
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

/// Stub standing in for a MySQL-backed repository.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlUserRepository;

impl UserRepository for MySqlUserRepository {
    fn save(&self, user: &User) -> Result<(), UserError> {
        info!("Saving user in MySQL: {}", user.name);
        Ok(())
    }

    fn find_by_id(&self, id: u64) -> Result<User, UserError> {
        Ok(User::new(id, "From MySQL"))
    }

    fn name(&self) -> &'static str {
        "mysql"
    }
}
