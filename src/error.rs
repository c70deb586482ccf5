//! Error types for authentication, factories and the user service.
//!
//! All failures are returned as values so callers can branch on the kind
//! without unwinding. Nothing in this crate retries on its own: callers
//! decide whether to prompt for new credentials or reject the request.

use thiserror::Error;

/// Errors returned by [`AuthStrategy::authenticate`](crate::auth::AuthStrategy::authenticate)
/// and [`AuthContext::authenticate`](crate::auth::AuthContext::authenticate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token was not accepted by a token-based scheme (JWT, OAuth2).
    #[error("invalid {scheme} token")]
    InvalidToken { scheme: &'static str },

    /// The credential pair was not accepted by the Basic scheme.
    #[error("invalid basic credentials")]
    InvalidCredentials,

    /// `authenticate` was called on a context with no strategy set.
    #[error("no authentication strategy selected")]
    NoStrategySelected,
}

impl AuthError {
    /// Short, stable identifier for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::InvalidToken { .. } => "invalid_token",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::NoStrategySelected => "no_strategy_selected",
        }
    }
}

/// A name did not match any member of a closed set of kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} type: {value}")]
pub struct UnknownKindError {
    /// What was being looked up ("strategy", "repository").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownKindError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Errors from the user repository and notifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("user {0} not found")]
    NotFound(u64),

    #[error("notification failed: {0}")]
    Notify(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    mod auth_error {
        use super::*;

        #[test]
        fn test_invalid_token_names_scheme() {
            let err = AuthError::InvalidToken { scheme: "JWT" };
            assert_eq!(err.to_string(), "invalid JWT token");

            let err = AuthError::InvalidToken { scheme: "OAuth2" };
            assert_eq!(err.to_string(), "invalid OAuth2 token");
        }

        #[test]
        fn test_invalid_credentials_message() {
            assert_eq!(
                AuthError::InvalidCredentials.to_string(),
                "invalid basic credentials"
            );
        }

        #[test]
        fn test_no_strategy_selected_message() {
            assert_eq!(
                AuthError::NoStrategySelected.to_string(),
                "no authentication strategy selected"
            );
        }

        #[test]
        fn test_kind_ignores_scheme() {
            let jwt = AuthError::InvalidToken { scheme: "JWT" };
            let oauth = AuthError::InvalidToken { scheme: "OAuth2" };
            assert_eq!(jwt.kind(), oauth.kind());
            assert_eq!(jwt.kind(), "invalid_token");
        }

        #[test]
        fn test_kinds_are_distinct() {
            let kinds = [
                AuthError::InvalidToken { scheme: "JWT" }.kind(),
                AuthError::InvalidCredentials.kind(),
                AuthError::NoStrategySelected.kind(),
            ];
            assert_ne!(kinds[0], kinds[1]);
            assert_ne!(kinds[1], kinds[2]);
            assert_ne!(kinds[0], kinds[2]);
        }
    }

    #[test]
    fn test_unknown_kind_message() {
        let err = UnknownKindError::new("repository", "oracle");
        assert_eq!(err.to_string(), "unknown repository type: oracle");
        assert_eq!(err.value, "oracle");
    }

    #[test]
    fn test_user_error_messages() {
        assert_eq!(UserError::NotFound(7).to_string(), "user 7 not found");
        assert_eq!(
            UserError::Notify("smtp down".into()).to_string(),
            "notification failed: smtp down"
        );
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<AuthError>();
        assert_send_sync::<UnknownKindError>();
        assert_send_sync::<UserError>();
    }
}
