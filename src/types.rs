//! Identity and serializable result types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Opaque identifier returned on successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Identity {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for Identity {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identity {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Record of a single authentication attempt, as printed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthOutcome {
    /// Name of the strategy that handled the attempt, if one was selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    pub authenticated: bool,
    /// Identity returned on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    /// Error kind on failure (e.g. "invalid_token")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable error message on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// When the attempt was made (RFC3339 format)
    pub checked_at: String,
}

impl AuthOutcome {
    /// Build an outcome from the result of an authentication call.
    pub fn from_result(strategy: Option<&str>, result: &Result<Identity, AuthError>) -> Self {
        let checked_at = chrono::Utc::now().to_rfc3339();
        let strategy = strategy.map(str::to_string);
        match result {
            Ok(identity) => Self {
                strategy,
                authenticated: true,
                identity: Some(identity.clone()),
                error: None,
                message: None,
                checked_at,
            },
            Err(e) => Self {
                strategy,
                authenticated: false,
                identity: None,
                error: Some(e.kind().to_string()),
                message: Some(e.to_string()),
                checked_at,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_display_and_eq() {
        let id = Identity::new("user123");
        assert_eq!(id.to_string(), "user123");
        assert_eq!(id, "user123");
        assert_eq!(id.as_str(), "user123");
    }

    #[test]
    fn test_identity_serializes_as_plain_string() {
        let json = serde_json::to_string(&Identity::from("user123")).unwrap();
        assert_eq!(json, "\"user123\"");
    }

    #[test]
    fn test_outcome_from_success() {
        let outcome = AuthOutcome::from_result(Some("jwt"), &Ok(Identity::from("user123")));
        assert!(outcome.authenticated);
        assert_eq!(outcome.identity, Some(Identity::from("user123")));
        assert!(outcome.error.is_none());

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["strategy"], "jwt");
        assert_eq!(value["identity"], "user123");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_outcome_from_failure() {
        let outcome = AuthOutcome::from_result(Some("basic"), &Err(AuthError::InvalidCredentials));
        assert!(!outcome.authenticated);
        assert!(outcome.identity.is_none());
        assert_eq!(outcome.error.as_deref(), Some("invalid_credentials"));
        assert_eq!(outcome.message.as_deref(), Some("invalid basic credentials"));
    }

    #[test]
    fn test_outcome_without_strategy_omits_field() {
        let outcome = AuthOutcome::from_result(None, &Err(AuthError::NoStrategySelected));
        let value = serde_json::to_value(&outcome).unwrap();
        assert!(value.get("strategy").is_none());
        assert_eq!(value["error"], "no_strategy_selected");
    }

    #[test]
    fn test_outcome_timestamp_is_rfc3339() {
        let outcome = AuthOutcome::from_result(None, &Err(AuthError::NoStrategySelected));
        assert!(chrono::DateTime::parse_from_rfc3339(&outcome.checked_at).is_ok());
    }
}
