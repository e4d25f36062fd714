//! List Users Service

use std::sync::Arc;

use async_trait::async_trait;

use super::errors::UserError;
use crate::domain::{User, UserRepository};

/// List users service trait
#[async_trait]
pub trait ListUsersService: Send + Sync {
    /// Every user, in store order
    async fn list_users(&self) -> Result<Vec<User>, UserError>;
}

/// ListUsersService implementation
pub struct ListUsersServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
}

impl<U> ListUsersServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> ListUsersService for ListUsersServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.user_repo.get_all().await?)
    }
}
