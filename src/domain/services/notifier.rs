//! Notification port.
//!
//! Services tell users about account events through this trait. Delivery is
//! an infrastructure concern; a failed delivery never undoes the write that
//! triggered it.

use async_trait::async_trait;
use serde::Serialize;

/// Account event a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Welcome,
    ProfileUpdated,
    AccountDeleted,
}

impl NotificationKind {
    pub fn subject(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome aboard",
            Self::ProfileUpdated => "Your profile was updated",
            Self::AccountDeleted => "Your account was deleted",
        }
    }
}

/// A message addressed to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub recipient: String,
    pub kind: NotificationKind,
    pub subject: String,
}

impl Notification {
    pub fn new(recipient: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            recipient: recipient.into(),
            kind,
            subject: kind.subject().to_string(),
        }
    }
}

/// Notification delivery errors
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Sends notifications to users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_subject_follows_kind() {
        let n = Notification::new("alice@example.com", NotificationKind::Welcome);
        assert_eq!(n.subject, "Welcome aboard");
        assert_eq!(n.recipient, "alice@example.com");
    }
}
