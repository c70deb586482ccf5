//! Command implementations behind the `strategy-auth` binary.
//!
//! - `authenticate`: check credentials with one strategy
//! - `register`: register a user through `UserService` and read it back
//!
//! Both return a report that the binary renders; nothing here writes to
//! stdout or decides the process exit code directly.

use std::sync::Arc;

use tracing::info;

use crate::auth::{AuthContext, StrategyFactory, StrategyKind};
use crate::error::UserError;
use crate::types::AuthOutcome;
use crate::users::{RepositoryKind, User, UserNotifier, UserService};

/// Outcomes of one `authenticate` run.
#[derive(Debug, Clone)]
pub struct AuthReport {
    pub outcomes: Vec<AuthOutcome>,
}

impl AuthReport {
    /// Number of credentials that were not accepted.
    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.authenticated).count()
    }

    /// Process exit code: 0 when every credential was accepted, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.rejected() == 0 { 0 } else { 1 }
    }

    /// One output line per credential, either plain text or a JSON object.
    pub fn render(&self, json: bool) -> Result<Vec<String>, serde_json::Error> {
        self.outcomes
            .iter()
            .map(|outcome| {
                if json {
                    return serde_json::to_string(outcome);
                }
                Ok(match (&outcome.identity, &outcome.message) {
                    (Some(identity), _) => format!("authenticated user: {}", identity),
                    (None, Some(message)) => format!("authentication error: {}", message),
                    (None, None) => "authentication error".to_string(),
                })
            })
            .collect()
    }
}

/// Authenticate every credential with the strategy `kind` built by `factory`.
pub fn run_authenticate(
    factory: &StrategyFactory,
    kind: StrategyKind,
    credentials: &[String],
) -> AuthReport {
    let mut context = AuthContext::new();
    context.set_boxed_strategy(factory.create(kind));
    info!("Authenticating {} credential(s) with {}", credentials.len(), kind);

    AuthReport {
        outcomes: context.authenticate_all(credentials),
    }
}

/// Result of one `register` run.
#[derive(Debug, Clone)]
pub struct Registration {
    pub repository: RepositoryKind,
    /// User as passed to the repository
    pub created: User,
    /// User as read back from the repository
    pub found: User,
}

impl Registration {
    pub fn render(&self) -> Result<Vec<String>, serde_json::Error> {
        Ok(vec![
            format!("created: {}", serde_json::to_string(&self.created)?),
            format!(
                "from {} repository: {}",
                self.repository,
                serde_json::to_string(&self.found)?
            ),
        ])
    }
}

/// Register a user in a fresh repository of `repository` kind, then read it back.
pub fn run_register(
    repository: RepositoryKind,
    notifier: Arc<dyn UserNotifier>,
    id: u64,
    name: impl Into<String>,
) -> Result<Registration, UserError> {
    let service = UserService::new(repository.create()).with_notifier(notifier);

    let created = service.register_user(id, name)?;
    let found = service.get_user(id)?;

    Ok(Registration {
        repository,
        created,
        found,
    })
}
