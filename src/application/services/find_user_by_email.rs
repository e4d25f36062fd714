//! Find User By Email Service

use std::sync::Arc;

use async_trait::async_trait;

use super::errors::UserError;
use crate::domain::{User, UserRepository};

/// Email lookup service trait
#[async_trait]
pub trait FindUserByEmailService: Send + Sync {
    /// Get user by email
    async fn find_by_email(&self, email: &str) -> Result<User, UserError>;
}

/// FindUserByEmailService implementation
pub struct FindUserByEmailServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
}

impl<U> FindUserByEmailServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> FindUserByEmailService for FindUserByEmailServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn find_by_email(&self, email: &str) -> Result<User, UserError> {
        Ok(self.user_repo.get_by_email(email).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemoryUserRepository;

    #[tokio::test]
    async fn test_find_by_email_on_empty_store_is_not_found() {
        let err = FindUserByEmailServiceImpl::new(Arc::new(InMemoryUserRepository::new()))
            .find_by_email("nobody@example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::NotFound));
    }

    #[tokio::test]
    async fn test_find_by_email_returns_the_owner() {
        let users = Arc::new(InMemoryUserRepository::new());
        let alice = users
            .save(&User::new("Alice", "alice@example.com", "h"))
            .await
            .unwrap();

        let found = FindUserByEmailServiceImpl::new(users)
            .find_by_email("alice@example.com")
            .await
            .unwrap();

        assert_eq!(found.id, alice.id);
    }
}
