//! Credential verification behind a strategy.
//!
//! A strategy decides *which* error kind a rejection maps to; the verifier
//! decides *whether* a credential is accepted. Real checks (JWT signatures,
//! token introspection) plug in here without touching the strategies.

use crate::types::Identity;

/// Decides whether a credential is accepted and, if so, for which identity.
pub trait CredentialVerifier: Send + Sync {
    /// Returns the identity for an accepted credential, `None` otherwise.
    fn verify(&self, credential: &str) -> Option<Identity>;
}

impl<F> CredentialVerifier for F
where
    F: Fn(&str) -> Option<Identity> + Send + Sync,
{
    fn verify(&self, credential: &str) -> Option<Identity> {
        self(credential)
    }
}

/// Accepts exactly one literal credential.
#[derive(Debug, Clone)]
pub struct LiteralVerifier {
    accepted: String,
    identity: Identity,
}

impl LiteralVerifier {
    /// Create a verifier accepting `accepted` and returning `identity`.
    pub fn new(accepted: impl Into<String>, identity: impl Into<Identity>) -> Self {
        Self {
            accepted: accepted.into(),
            identity: identity.into(),
        }
    }
}

impl CredentialVerifier for LiteralVerifier {
    fn verify(&self, credential: &str) -> Option<Identity> {
        (credential == self.accepted).then(|| self.identity.clone())
    }
}
