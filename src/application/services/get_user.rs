//! Get User Service

use std::sync::Arc;

use async_trait::async_trait;

use super::errors::UserError;
use crate::domain::{User, UserRepository};

/// Get user service trait
#[async_trait]
pub trait GetUserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, user_id: i64) -> Result<User, UserError>;
}

/// GetUserService implementation
pub struct GetUserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
}

impl<U> GetUserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> GetUserService for GetUserServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn get_user(&self, user_id: i64) -> Result<User, UserError> {
        Ok(self.user_repo.get_by_id(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::repositories::InMemoryUserRepository;

    #[tokio::test]
    async fn test_get_user_round_trips_saved_fields() {
        let users = Arc::new(InMemoryUserRepository::new());
        let saved = users
            .save(&User::new("Alice", "alice@example.com", "h"))
            .await
            .unwrap();

        let fetched = GetUserServiceImpl::new(users)
            .get_user(saved.id.unwrap())
            .await
            .unwrap();

        assert_eq!(fetched, saved);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let err = GetUserServiceImpl::new(Arc::new(InMemoryUserRepository::new()))
            .get_user(1)
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::NotFound));
    }
}
