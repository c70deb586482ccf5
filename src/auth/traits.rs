//! Authentication strategy trait definition.
//!
//! Defines the interface for authentication strategies, enabling
//! the Strategy pattern for credential schemes.

use crate::error::AuthError;
use crate::types::Identity;

/// Trait for authentication strategies.
///
/// Implementations must be thread-safe (`Send + Sync`) so a context can be
/// moved or shared behind a lock. Each strategy represents a different
/// credential scheme (JWT, Basic, OAuth2, etc.) and is stateless: the same
/// credential always yields the same result.
pub trait AuthStrategy: Send + Sync {
    /// Attempt to authenticate a credential.
    ///
    /// # Returns
    ///
    /// * `Ok(identity)` - The credential was accepted
    /// * `Err(error)` - The credential was rejected; the kind depends on the scheme
    fn authenticate(&self, credential: &str) -> Result<Identity, AuthError>;

    /// Get the name of this authentication strategy.
    ///
    /// Used for logging and debugging purposes.
    fn name(&self) -> &'static str;
}

impl<S: AuthStrategy + ?Sized> AuthStrategy for Box<S> {
    fn authenticate(&self, credential: &str) -> Result<Identity, AuthError> {
        (**self).authenticate(credential)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
