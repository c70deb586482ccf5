//! Strategy selection by name.
//!
//! [`StrategyKind`] is the closed set of supported credential schemes and
//! [`StrategyFactory`] turns a kind (or its name) into a ready strategy,
//! wired with the accepted credential and identity it was configured with.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::config::{
    DEFAULT_BASIC_CREDENTIALS, DEFAULT_IDENTITY, DEFAULT_JWT_TOKEN, DEFAULT_OAUTH2_TOKEN,
    resolve_basic_credentials, resolve_identity, resolve_jwt_token, resolve_oauth2_token,
};
use crate::error::UnknownKindError;

use super::traits::AuthStrategy;
use super::verifier::LiteralVerifier;
use super::{BasicAuth, JwtAuth, OAuth2Auth};

/// Supported credential schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Jwt,
    Basic,
    OAuth2,
}

impl StrategyKind {
    /// Every supported kind, in display order.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Jwt,
        StrategyKind::Basic,
        StrategyKind::OAuth2,
    ];

    /// Canonical lowercase name, matching [`AuthStrategy::name`].
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Jwt => "jwt",
            StrategyKind::Basic => "basic",
            StrategyKind::OAuth2 => "oauth2",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jwt" => Ok(StrategyKind::Jwt),
            "basic" => Ok(StrategyKind::Basic),
            "oauth2" | "oauth" => Ok(StrategyKind::OAuth2),
            _ => Err(UnknownKindError::new("strategy", s)),
        }
    }
}

/// Builds strategies from a [`StrategyKind`].
///
/// Holds the accepted credential for each scheme plus the identity every
/// strategy returns on success.
#[derive(Debug, Clone)]
pub struct StrategyFactory {
    identity: String,
    jwt_token: String,
    basic_credentials: String,
    oauth2_token: String,
}

impl StrategyFactory {
    /// Factory using the built-in literals.
    pub fn new() -> Self {
        Self {
            identity: DEFAULT_IDENTITY.to_string(),
            jwt_token: DEFAULT_JWT_TOKEN.to_string(),
            basic_credentials: DEFAULT_BASIC_CREDENTIALS.to_string(),
            oauth2_token: DEFAULT_OAUTH2_TOKEN.to_string(),
        }
    }

    /// Factory whose literals are resolved from the environment, falling
    /// back to the built-in defaults.
    pub fn from_env() -> Self {
        Self {
            identity: resolve_identity(None),
            jwt_token: resolve_jwt_token(None),
            basic_credentials: resolve_basic_credentials(None),
            oauth2_token: resolve_oauth2_token(None),
        }
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }

    pub fn with_jwt_token(mut self, token: impl Into<String>) -> Self {
        self.jwt_token = token.into();
        self
    }

    pub fn with_basic_credentials(mut self, credentials: impl Into<String>) -> Self {
        self.basic_credentials = credentials.into();
        self
    }

    pub fn with_oauth2_token(mut self, token: impl Into<String>) -> Self {
        self.oauth2_token = token.into();
        self
    }

    /// Build the strategy for `kind`.
    pub fn create(&self, kind: StrategyKind) -> Box<dyn AuthStrategy> {
        debug!("Creating {} strategy", kind);
        let identity = self.identity.as_str();
        match kind {
            StrategyKind::Jwt => Box::new(JwtAuth::with_verifier(LiteralVerifier::new(
                self.jwt_token.as_str(),
                identity,
            ))),
            StrategyKind::Basic => Box::new(BasicAuth::with_verifier(LiteralVerifier::new(
                self.basic_credentials.as_str(),
                identity,
            ))),
            StrategyKind::OAuth2 => Box::new(OAuth2Auth::with_verifier(LiteralVerifier::new(
                self.oauth2_token.as_str(),
                identity,
            ))),
        }
    }

    /// Build the strategy whose name is `name`.
    pub fn create_named(&self, name: &str) -> Result<Box<dyn AuthStrategy>, UnknownKindError> {
        Ok(self.create(name.parse()?))
    }
}

impl Default for StrategyFactory {
    fn default() -> Self {
        Self::new()
    }
}
