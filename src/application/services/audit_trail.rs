//! Audit Trail Service

use std::sync::Arc;

use async_trait::async_trait;

use super::errors::UserError;
use crate::domain::{AuditEntry, AuditRepository, UserRepository};

/// Audit trail service trait
#[async_trait]
pub trait AuditTrailService: Send + Sync {
    /// Audit entries for a user, oldest first
    async fn audit_trail(&self, user_id: i64) -> Result<Vec<AuditEntry>, UserError>;
}

/// AuditTrailService implementation
pub struct AuditTrailServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
    audit_repo: Arc<dyn AuditRepository>,
}

impl<U> AuditTrailServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>, audit_repo: Arc<dyn AuditRepository>) -> Self {
        Self {
            user_repo,
            audit_repo,
        }
    }
}

#[async_trait]
impl<U> AuditTrailService for AuditTrailServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn audit_trail(&self, user_id: i64) -> Result<Vec<AuditEntry>, UserError> {
        let entries = self.audit_repo.list_for_user(user_id).await?;

        // Deleted users keep their trail; only an id never seen is unknown
        if entries.is_empty() {
            self.user_repo.get_by_id(user_id).await?;
        }

        Ok(entries)
    }
}
