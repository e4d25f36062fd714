//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::RepositoryError;

/// Represents a user account.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(100) NOT NULL
/// - email: VARCHAR(254) NOT NULL UNIQUE
/// - password_hash: VARCHAR(255) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned id; `None` until the first save
    pub id: Option<i64>,

    /// Display name
    pub name: String,

    /// Email address (unique)
    pub email: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a user that has not been persisted yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for User data access operations.
///
/// The only component allowed to read or write users. Implementations live in
/// the infrastructure layer; nothing here validates business rules.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user. Ordering is defined by the store.
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Find a user by id, failing with `NotFound` when absent.
    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError>;

    /// Find a user by email, failing with `NotFound` when absent.
    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError>;

    /// Insert a user without an id, or update the row matching its id.
    async fn save(&self, user: &User) -> Result<User, RepositoryError>;

    /// Delete a user by id.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
