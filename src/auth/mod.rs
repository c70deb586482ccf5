//! Authentication strategies and the context that dispatches to them.
//!
//! This module provides a trait-based authentication system that follows
//! the Strategy pattern, allowing new credential schemes to be added
//! without modifying existing code.
//!
//! # Available Strategies
//!
//! - [`JwtAuth`]: JWT bearer token authentication
//! - [`BasicAuth`]: `user:password` authentication
//! - [`OAuth2Auth`]: OAuth2 access token authentication
//!
//! Each strategy delegates the accept/reject decision to a
//! [`CredentialVerifier`]; the bundled [`LiteralVerifier`] accepts a single
//! configured value.
//!
//! # Example
//!
//! ```
//! use strategy_auth::auth::{AuthContext, StrategyFactory, StrategyKind};
//!
//! let factory = StrategyFactory::new();
//! let mut context = AuthContext::new();
//! context.set_boxed_strategy(factory.create(StrategyKind::Basic));
//!
//! let identity = context.authenticate("user:password").unwrap();
//! assert_eq!(identity.as_str(), "user123");
//! ```

mod basic;
mod context;
mod factory;
mod jwt;
mod oauth2;
mod traits;
mod verifier;

pub use basic::BasicAuth;
pub use context::AuthContext;
pub use factory::{StrategyFactory, StrategyKind};
pub use jwt::JwtAuth;
pub use oauth2::OAuth2Auth;
pub use traits::AuthStrategy;
pub use verifier::{CredentialVerifier, LiteralVerifier};
