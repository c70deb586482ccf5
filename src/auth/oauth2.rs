//! OAuth2 access token authentication.

use tracing::debug;

use crate::config::{DEFAULT_IDENTITY, DEFAULT_OAUTH2_TOKEN};
use crate::error::AuthError;
use crate::types::Identity;

use super::traits::AuthStrategy;
use super::verifier::{CredentialVerifier, LiteralVerifier};

/// OAuth2 authentication strategy.
///
/// A production setup would introspect the token against the authorization
/// server through a custom [`CredentialVerifier`].
pub struct OAuth2Auth {
    verifier: Box<dyn CredentialVerifier>,
}

impl OAuth2Auth {
    pub fn new() -> Self {
        Self::with_verifier(LiteralVerifier::new(DEFAULT_OAUTH2_TOKEN, DEFAULT_IDENTITY))
    }

    pub fn with_verifier(verifier: impl CredentialVerifier + 'static) -> Self {
        Self {
            verifier: Box::new(verifier),
        }
    }
}

impl Default for OAuth2Auth {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStrategy for OAuth2Auth {
    fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        self.verifier.verify(token).ok_or_else(|| {
            debug!("OAuth2 token rejected");
            AuthError::InvalidToken { scheme: "OAuth2" }
        })
    }

    fn name(&self) -> &'static str {
        "oauth2"
    }
}
