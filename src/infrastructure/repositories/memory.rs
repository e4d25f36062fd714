//! In-Memory Repositories
//!
//! Process-local implementations of the repository traits. They honour the
//! same contracts as the PostgreSQL repositories (ids assigned on insert,
//! unique email, `NotFound` on missing rows) and back the `memory` storage
//! backend and the integration tests.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::{Mutex, RwLock};

use crate::domain::{AuditEntry, AuditRepository, RepositoryError, User, UserRepository};

const USER: &str = "user";

#[derive(Default)]
struct UserTable {
    last_id: i64,
    rows: BTreeMap<i64, User>,
    by_email: HashMap<String, i64>,
}

/// User repository held in process memory.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        self.table
            .read()
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(USER, id))
    }

    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        let table = self.table.read();
        table
            .by_email
            .get(email)
            .and_then(|id| table.rows.get(id))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(USER, email))
    }

    async fn save(&self, user: &User) -> Result<User, RepositoryError> {
        let mut table = self.table.write();
        let now = Utc::now();

        match user.id {
            None => {
                if table.by_email.contains_key(&user.email) {
                    return Err(RepositoryError::conflict(USER, "email already registered"));
                }

                table.last_id += 1;
                let id = table.last_id;
                let stored = User {
                    id: Some(id),
                    created_at: now,
                    updated_at: now,
                    ..user.clone()
                };
                table.by_email.insert(stored.email.clone(), id);
                table.rows.insert(id, stored.clone());
                Ok(stored)
            }
            Some(id) => {
                let previous = table
                    .rows
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| RepositoryError::not_found(USER, id))?;

                if let Some(owner) = table.by_email.get(&user.email) {
                    if *owner != id {
                        return Err(RepositoryError::conflict(USER, "email already registered"));
                    }
                }

                let stored = User {
                    id: Some(id),
                    created_at: previous.created_at,
                    updated_at: now,
                    ..user.clone()
                };
                table.by_email.remove(&previous.email);
                table.by_email.insert(stored.email.clone(), id);
                table.rows.insert(id, stored.clone());
                Ok(stored)
            }
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut table = self.table.write();
        let removed = table
            .rows
            .remove(&id)
            .ok_or_else(|| RepositoryError::not_found(USER, id))?;
        table.by_email.remove(&removed.email);
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Append-only audit log held in process memory.
#[derive(Default)]
pub struct InMemoryAuditRepository {
    entries: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditRepository {
    async fn record(&self, entry: &AuditEntry) -> Result<(), RepositoryError> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<AuditEntry>, RepositoryError> {
        Ok(self
            .entries
            .lock()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }
}
