//! Create User Service
//!
//! Validates a new account, stores it, then audits and welcomes the user.

use std::sync::Arc;

use async_trait::async_trait;

use super::errors::UserError;
use super::password::hash_password;
use super::rules::check_user;
use super::side_effects::SideEffects;
use crate::application::dto::UserDto;
use crate::config::UserRules;
use crate::domain::{AuditAction, NotificationKind, User, UserRepository};
use crate::infrastructure::metrics;

/// Create user service trait
#[async_trait]
pub trait CreateUserService: Send + Sync {
    /// Register a new user from a DTO
    async fn create(&self, dto: UserDto) -> Result<User, UserError>;
}

/// CreateUserService implementation
pub struct CreateUserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
    side_effects: SideEffects,
    rules: UserRules,
}

impl<U> CreateUserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>, side_effects: SideEffects, rules: UserRules) -> Self {
        Self {
            user_repo,
            side_effects,
            rules,
        }
    }

    async fn create_user(&self, dto: UserDto) -> Result<User, UserError> {
        check_user(&dto, &self.rules)?;

        match self.user_repo.get_by_email(dto.email()).await {
            Ok(_) => return Err(UserError::EmailTaken),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e.into()),
        }

        let password_hash = hash_password(dto.password())?;
        let user = User::new(dto.name(), dto.email(), password_hash);

        let created = self.user_repo.save(&user).await?;
        let user_id = created
            .id
            .ok_or_else(|| UserError::Internal("Store returned a user without an id".into()))?;
        tracing::info!(user_id, "User created");

        self.side_effects.audit(user_id, AuditAction::Created, None).await;
        self.side_effects
            .notify(&created.email, NotificationKind::Welcome)
            .await;

        Ok(created)
    }
}

#[async_trait]
impl<U> CreateUserService for CreateUserServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn create(&self, dto: UserDto) -> Result<User, UserError> {
        let result = self.create_user(dto).await;
        metrics::record_user_operation("create", result.is_ok());
        result
    }
}
