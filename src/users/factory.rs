//! Repository selection by name.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::UnknownKindError;

use super::memory::InMemoryUserRepository;
use super::stub::{MySqlUserRepository, PostgresUserRepository};
use super::traits::UserRepository;

/// Supported repository backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryKind {
    Postgres,
    MySql,
    InMemory,
}

impl RepositoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryKind::Postgres => "postgres",
            RepositoryKind::MySql => "mysql",
            RepositoryKind::InMemory => "memory",
        }
    }

    /// Build a fresh repository of this kind.
    pub fn create(&self) -> Arc<dyn UserRepository> {
        match self {
            RepositoryKind::Postgres => Arc::new(PostgresUserRepository),
            RepositoryKind::MySql => Arc::new(MySqlUserRepository),
            RepositoryKind::InMemory => Arc::new(InMemoryUserRepository::new()),
        }
    }
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepositoryKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(RepositoryKind::Postgres),
            "mysql" => Ok(RepositoryKind::MySql),
            "memory" | "in-memory" => Ok(RepositoryKind::InMemory),
            _ => Err(UnknownKindError::new("repository", s)),
        }
    }
}
