//! Strategy-based authentication dispatch.
//!
//! The crate is organized into the following modules:
//!
//! - `auth`: Authentication strategies, the verifier seam, the strategy
//!   factory and the single-slot `AuthContext`
//! - `users`: User service with injected repository and notifier
//! - `commands`: `authenticate` and `register` implementations behind the CLI
//! - `config`: Configuration resolution with environment variable support
//! - `logging`: `tracing-subscriber` filter and initialization
//! - `error`: Error types shared across modules
//! - `types`: Serializable records printed by the CLI

pub mod auth;
pub mod commands;
pub mod config;
pub mod logging;
pub mod error;
pub mod types;
pub mod users;

pub use auth::{AuthContext, AuthStrategy, StrategyFactory, StrategyKind};
pub use error::{AuthError, UnknownKindError, UserError};
pub use types::{AuthOutcome, Identity};
