//! Notification Delivery
//!
//! Notifier implementations. Real delivery (SMTP, push) is not wired up; the
//! tracing notifier records each notification as a structured log event.

use async_trait::async_trait;

use crate::domain::{Notification, NotificationError, Notifier};

/// Writes every notification to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        tracing::info!(
            recipient = %notification.recipient,
            kind = ?notification.kind,
            subject = %notification.subject,
            "Notification dispatched"
        );
        Ok(())
    }
}

/// Drops notifications; used when `notifications.enabled` is false.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        tracing::debug!(kind = ?notification.kind, "Notifications disabled, skipping");
        Ok(())
    }
}
