//! Database Module
//!
//! PostgreSQL connection pool, migrations and sqlx error translation.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::domain::RepositoryError;

/// Create a PostgreSQL connection pool
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(&settings.url)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Translate a sqlx failure into the repository error vocabulary.
///
/// Unique violations become `Conflict`; everything else means the store could
/// not complete the statement.
pub fn map_sqlx_error(entity: &'static str, err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::conflict(entity, db_err.message().to_string())
        }
        _ => {
            tracing::error!(entity, error = %err, "Database error");
            RepositoryError::unavailable(err.to_string())
        }
    }
}
