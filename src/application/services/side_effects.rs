//! Best-effort side effects run after a user write is persisted.
//!
//! Failures are logged and counted; they never fail or undo the write.

use std::sync::Arc;

use crate::domain::{AuditAction, AuditEntry, AuditRepository, Notification, NotificationKind, Notifier};
use crate::infrastructure::metrics;

/// Audit log and notifier shared by the write services.
#[derive(Clone)]
pub struct SideEffects {
    audit: Arc<dyn AuditRepository>,
    notifier: Arc<dyn Notifier>,
}

impl SideEffects {
    pub fn new(audit: Arc<dyn AuditRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { audit, notifier }
    }

    /// Append an audit entry for a persisted write.
    pub async fn audit(&self, user_id: i64, action: AuditAction, detail: Option<String>) {
        let entry = AuditEntry::new(user_id, action, detail);
        if let Err(e) = self.audit.record(&entry).await {
            tracing::warn!(user_id, action = %action, error = %e, "Audit record failed");
            metrics::record_side_effect_failure("audit");
        }
    }

    /// Tell the user about an account event.
    pub async fn notify(&self, recipient: &str, kind: NotificationKind) {
        let notification = Notification::new(recipient, kind);
        if let Err(e) = self.notifier.notify(&notification).await {
            tracing::warn!(kind = ?kind, error = %e, "Notification failed");
            metrics::record_side_effect_failure("notification");
        }
    }
}
