//! Audit entry entity and repository trait.
//!
//! Maps to the `user_audit_log` table. Entries are written after a user write
//! has been persisted and are never updated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

/// Kind of user write that was audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Created,
    Updated,
    Deleted,
}

impl AuditAction {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }

    /// Parse the database representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "created" => Some(Self::Created),
            "updated" => Some(Self::Updated),
            "deleted" => Some(Self::Deleted),
            _ => None,
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record of one successful user write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub user_id: i64,
    pub action: AuditAction,
    pub detail: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(user_id: i64, action: AuditAction, detail: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            action,
            detail,
            recorded_at: Utc::now(),
        }
    }
}

/// Repository trait for audit entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Append an entry.
    async fn record(&self, entry: &AuditEntry) -> Result<(), RepositoryError>;

    /// Entries for one user, oldest first.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<AuditEntry>, RepositoryError>;
}
