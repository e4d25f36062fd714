//! Audit Repository Implementation
//!
//! PostgreSQL implementation of the AuditRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{AuditAction, AuditEntry, AuditRepository, RepositoryError};
use crate::infrastructure::database::map_sqlx_error;

const ENTITY: &str = "audit entry";

#[derive(Debug, sqlx::FromRow)]
struct AuditRow {
    id: Uuid,
    user_id: i64,
    action: String,
    detail: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<AuditRow> for AuditEntry {
    type Error = RepositoryError;

    fn try_from(row: AuditRow) -> Result<Self, Self::Error> {
        let action = AuditAction::parse(&row.action).ok_or_else(|| {
            RepositoryError::unavailable(format!("unknown audit action '{}'", row.action))
        })?;

        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            action,
            detail: row.detail,
            recorded_at: row.recorded_at,
        })
    }
}

/// PostgreSQL audit log repository.
#[derive(Clone)]
pub struct PgAuditRepository {
    pool: PgPool,
}

impl PgAuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditRepository for PgAuditRepository {
    async fn record(&self, entry: &AuditEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO user_audit_log (id, user_id, action, detail, recorded_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.id)
        .bind(entry.user_id)
        .bind(entry.action.as_str())
        .bind(&entry.detail)
        .bind(entry.recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(ENTITY, e))?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<AuditEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, AuditRow>(
            r#"
            SELECT id, user_id, action, detail, recorded_at
            FROM user_audit_log
            WHERE user_id = $1
            ORDER BY recorded_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(ENTITY, e))?;

        rows.into_iter().map(AuditEntry::try_from).collect()
    }
}
