//! Single-slot holder of the active authentication strategy.

use tracing::{debug, info};

use crate::error::AuthError;
use crate::types::{AuthOutcome, Identity};

use super::traits::AuthStrategy;

/// Holds at most one active strategy and delegates authentication to it.
///
/// The context starts either empty or with a default strategy. Selecting a
/// strategy replaces the previous one wholesale; strategies are never
/// merged or stacked. Authenticating while empty fails with
/// [`AuthError::NoStrategySelected`].
///
/// `set_strategy` takes `&mut self`, so sharing a context across threads
/// requires an external lock such as `Mutex<AuthContext>`.
///
/// # Example
///
/// ```
/// use strategy_auth::auth::{AuthContext, BasicAuth, JwtAuth};
///
/// let mut context = AuthContext::new();
/// context.set_strategy(JwtAuth::new());
/// assert!(context.authenticate("valid-jwt-token").is_ok());
///
/// context.set_strategy(BasicAuth::new());
/// assert!(context.authenticate("valid-jwt-token").is_err());
/// ```
#[derive(Default)]
pub struct AuthContext {
    strategy: Option<Box<dyn AuthStrategy>>,
}

impl AuthContext {
    /// Create a context with no strategy selected.
    pub fn new() -> Self {
        Self { strategy: None }
    }

    /// Create a context with `strategy` already selected.
    pub fn with_strategy(strategy: impl AuthStrategy + 'static) -> Self {
        Self::with_boxed_strategy(Box::new(strategy))
    }

    /// Create a context from an already boxed strategy, e.g. one built by
    /// [`StrategyFactory`](super::StrategyFactory).
    pub fn with_boxed_strategy(strategy: Box<dyn AuthStrategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Replace the active strategy.
    pub fn set_strategy(&mut self, strategy: impl AuthStrategy + 'static) {
        self.set_boxed_strategy(Box::new(strategy));
    }

    /// Replace the active strategy with an already boxed one.
    pub fn set_boxed_strategy(&mut self, strategy: Box<dyn AuthStrategy>) {
        debug!(
            from = self.strategy_name().unwrap_or("none"),
            to = strategy.name(),
            "Selecting authentication strategy"
        );
        self.strategy = Some(strategy);
    }

    /// Whether a strategy has been selected.
    pub fn is_configured(&self) -> bool {
        self.strategy.is_some()
    }

    /// Name of the active strategy, if any.
    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    /// Authenticate `credential` with the active strategy.
    pub fn authenticate(&self, credential: &str) -> Result<Identity, AuthError> {
        let Some(strategy) = self.strategy.as_ref() else {
            debug!("Authentication attempted with no strategy selected");
            return Err(AuthError::NoStrategySelected);
        };

        let result = strategy.authenticate(credential);
        match &result {
            Ok(identity) => info!(strategy = strategy.name(), %identity, "Authenticated"),
            Err(e) => info!(strategy = strategy.name(), error = %e, "Authentication rejected"),
        }
        result
    }

    /// Authenticate each credential in order, recording one outcome per
    /// credential. Rejections do not stop the run.
    pub fn authenticate_all<S: AsRef<str>>(&self, credentials: &[S]) -> Vec<AuthOutcome> {
        credentials
            .iter()
            .map(|credential| {
                let result = self.authenticate(credential.as_ref());
                AuthOutcome::from_result(self.strategy_name(), &result)
            })
            .collect()
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("strategy", &self.strategy_name())
            .finish()
    }
}
