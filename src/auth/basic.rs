//! Basic `user:password` authentication.

use tracing::debug;

use crate::config::{DEFAULT_BASIC_CREDENTIALS, DEFAULT_IDENTITY};
use crate::error::AuthError;
use crate::types::Identity;

use super::traits::AuthStrategy;
use super::verifier::{CredentialVerifier, LiteralVerifier};

/// Basic authentication strategy.
///
/// Expects the credential as a single `user:password` string.
pub struct BasicAuth {
    verifier: Box<dyn CredentialVerifier>,
}

impl BasicAuth {
    /// Create a Basic strategy accepting the default `user:password` pair.
    pub fn new() -> Self {
        Self::with_verifier(LiteralVerifier::new(
            DEFAULT_BASIC_CREDENTIALS,
            DEFAULT_IDENTITY,
        ))
    }

    /// Create a Basic strategy backed by a custom verifier.
    pub fn with_verifier(verifier: impl CredentialVerifier + 'static) -> Self {
        Self {
            verifier: Box::new(verifier),
        }
    }
}

impl Default for BasicAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStrategy for BasicAuth {
    fn authenticate(&self, credentials: &str) -> Result<Identity, AuthError> {
        match self.verifier.verify(credentials) {
            Some(identity) => Ok(identity),
            None => {
                // Never log the credential itself
                debug!("Basic credentials rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    fn name(&self) -> &'static str {
        "basic"
    }
}
