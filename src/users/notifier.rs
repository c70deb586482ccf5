//! Email notifier.

use tracing::info;

use crate::error::UserError;

use super::traits::{User, UserNotifier};

/// Notifier that "sends" email by writing a log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailNotifier;

impl UserNotifier for EmailNotifier {
    fn notify(&self, user: &User, message: &str) -> Result<(), UserError> {
        info!(user_id = user.id, "Email to {}: {}", user.name, message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_notifier_succeeds() {
        let notifier = EmailNotifier;
        assert!(notifier.notify(&User::new(1, "Egor"), "hello").is_ok());
    }
}
