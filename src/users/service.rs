//! User registration service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::UserError;

use super::traits::{User, UserNotifier, UserRepository};

/// Message sent to every newly registered user.
pub const WELCOME_MESSAGE: &str = "Welcome to our system!";

/// Registers and looks up users.
///
/// Depends only on the [`UserRepository`] and [`UserNotifier`] traits; the
/// concrete backends are injected by the caller.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    notifier: Option<Arc<dyn UserNotifier>>,
}

impl UserService {
    /// Create a service without notifications.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            repo,
            notifier: None,
        }
    }

    /// Attach a notifier used after each successful registration.
    pub fn with_notifier(mut self, notifier: Arc<dyn UserNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Save a new user and send the welcome message.
    ///
    /// A failed save is returned without notifying. A failed notification is
    /// logged and does not fail the registration.
    pub fn register_user(&self, id: u64, name: impl Into<String>) -> Result<User, UserError> {
        let user = User::new(id, name);
        self.repo.save(&user)?;
        info!(repository = self.repo.name(), "Registered user {}", user.id);

        if let Some(notifier) = &self.notifier
            && let Err(e) = notifier.notify(&user, WELCOME_MESSAGE)
        {
            warn!("Failed to notify user {}: {}", user.id, e);
        }

        Ok(user)
    }

    pub fn get_user(&self, id: u64) -> Result<User, UserError> {
        self.repo.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::users::{InMemoryUserRepository, PostgresUserRepository};

    /// Notifier that records every message it is asked to send.
    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(u64, String)>>,
    }

    impl UserNotifier for RecordingNotifier {
        fn notify(&self, user: &User, message: &str) -> Result<(), UserError> {
            self.sent
                .lock()
                .unwrap()
                .push((user.id, message.to_string()));
            Ok(())
        }
    }

    struct FailingNotifier;

    impl UserNotifier for FailingNotifier {
        fn notify(&self, _user: &User, _message: &str) -> Result<(), UserError> {
            Err(UserError::Notify("smtp unavailable".into()))
        }
    }

    struct FailingRepository;

    impl UserRepository for FailingRepository {
        fn save(&self, user: &User) -> Result<(), UserError> {
            Err(UserError::NotFound(user.id))
        }

        fn find_by_id(&self, id: u64) -> Result<User, UserError> {
            Err(UserError::NotFound(id))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_register_then_get_in_memory() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        let created = service.register_user(2, "TestUser").unwrap();
        assert_eq!(created, User::new(2, "TestUser"));
        assert_eq!(service.get_user(2).unwrap(), created);
    }

    #[test]
    fn test_get_missing_user() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        assert_eq!(service.get_user(1), Err(UserError::NotFound(1)));
    }

    #[test]
    fn test_stub_repository_is_substitutable() {
        let service = UserService::new(Arc::new(PostgresUserRepository));
        service.register_user(1, "Egor").unwrap();
        assert_eq!(service.get_user(1).unwrap().name, "From Postgres");
    }

    #[test]
    fn test_notifies_after_save() {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()))
            .with_notifier(notifier.clone());

        service.register_user(1, "Egor").unwrap();
        service.register_user(2, "Ivan").unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(
            *sent,
            vec![
                (1, WELCOME_MESSAGE.to_string()),
                (2, WELCOME_MESSAGE.to_string())
            ]
        );
    }

    #[test]
    fn test_notifier_failure_does_not_fail_registration() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone()).with_notifier(Arc::new(FailingNotifier));

        assert!(service.register_user(3, "Anna").is_ok());
        assert_eq!(repo.find_by_id(3).unwrap().name, "Anna");
    }

    #[test]
    fn test_save_failure_skips_notification() {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = UserService::new(Arc::new(FailingRepository)).with_notifier(notifier.clone());

        assert_eq!(service.register_user(4, "Olga"), Err(UserError::NotFound(4)));
        assert!(notifier.sent.lock().unwrap().is_empty());
    }
}
