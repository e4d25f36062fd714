//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.
//! Maps between the database schema and domain User entity.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{RepositoryError, User, UserRepository};
use crate::infrastructure::database::map_sqlx_error;
use crate::infrastructure::metrics;

const ENTITY: &str = "user";

/// Database row representation matching the users table schema.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert database row to domain User entity.
    fn into_user(self) -> User {
        User {
            id: Some(self.id),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, user: &User) -> Result<UserRow, RepositoryError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(ENTITY, e))
    }

    async fn update(&self, id: i64, user: &User) -> Result<UserRow, RepositoryError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = $2,
                email = $3,
                password_hash = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(ENTITY, e))?
        .ok_or_else(|| RepositoryError::not_found(ENTITY, id))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        let start = Instant::now();
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(ENTITY, e))?;
        metrics::record_db_query("select_all", "users", start.elapsed().as_secs_f64());

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(ENTITY, e))?;
        metrics::record_db_query("select_by_id", "users", start.elapsed().as_secs_f64());

        row.map(UserRow::into_user)
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))
    }

    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        let start = Instant::now();
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(ENTITY, e))?;
        metrics::record_db_query("select_by_email", "users", start.elapsed().as_secs_f64());

        row.map(UserRow::into_user)
            .ok_or_else(|| RepositoryError::not_found(ENTITY, email))
    }

    async fn save(&self, user: &User) -> Result<User, RepositoryError> {
        let start = Instant::now();
        let (operation, row) = match user.id {
            None => ("insert", self.insert(user).await?),
            Some(id) => ("update", self.update(id, user).await?),
        };
        metrics::record_db_query(operation, "users", start.elapsed().as_secs_f64());

        Ok(row.into_user())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let start = Instant::now();
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(ENTITY, e))?;
        metrics::record_db_query("delete", "users", start.elapsed().as_secs_f64());

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(ENTITY, id));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(ENTITY, e))?;
        Ok(())
    }
}
