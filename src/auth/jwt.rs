//! JWT bearer token authentication.

use tracing::debug;

use crate::config::{DEFAULT_IDENTITY, DEFAULT_JWT_TOKEN};
use crate::error::AuthError;
use crate::types::Identity;

use super::traits::AuthStrategy;
use super::verifier::{CredentialVerifier, LiteralVerifier};

/// JWT authentication strategy.
///
/// The credential is the raw token string. The bundled verifier only
/// compares it against one accepted literal; signature validation against
/// a key store belongs in a custom [`CredentialVerifier`].
pub struct JwtAuth {
    verifier: Box<dyn CredentialVerifier>,
}

impl JwtAuth {
    /// Create a JWT strategy accepting the default token.
    pub fn new() -> Self {
        Self::with_verifier(LiteralVerifier::new(DEFAULT_JWT_TOKEN, DEFAULT_IDENTITY))
    }

    /// Create a JWT strategy backed by a custom verifier.
    pub fn with_verifier(verifier: impl CredentialVerifier + 'static) -> Self {
        Self {
            verifier: Box::new(verifier),
        }
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStrategy for JwtAuth {
    fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        self.verifier.verify(token).ok_or_else(|| {
            debug!("JWT token rejected");
            AuthError::InvalidToken { scheme: "JWT" }
        })
    }

    fn name(&self) -> &'static str {
        "jwt"
    }
}
