//! User registration with injected storage and notification.
//!
//! `UserService` depends only on the [`UserRepository`] and [`UserNotifier`]
//! traits. Backends:
//!
//! - [`InMemoryUserRepository`]: `DashMap`-backed, usable in tests
//! - [`PostgresUserRepository`], [`MySqlUserRepository`]: stubs that return
//!   fabricated users
//!
//! [`RepositoryKind`] selects a backend by name.

mod factory;
mod memory;
mod notifier;
mod service;
mod stub;
mod traits;

pub use factory::RepositoryKind;
pub use memory::InMemoryUserRepository;
pub use notifier::EmailNotifier;
pub use service::{UserService, WELCOME_MESSAGE};
pub use stub::{MySqlUserRepository, PostgresUserRepository};
pub use traits::{User, UserNotifier, UserRepository};
