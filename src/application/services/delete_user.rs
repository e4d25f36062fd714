//! Delete User Service

use std::sync::Arc;

use async_trait::async_trait;

use super::errors::UserError;
use super::side_effects::SideEffects;
use crate::domain::{AuditAction, NotificationKind, UserRepository};
use crate::infrastructure::metrics;

/// Delete user service trait
#[async_trait]
pub trait DeleteUserService: Send + Sync {
    /// Remove a user account
    async fn delete(&self, user_id: i64) -> Result<(), UserError>;
}

/// DeleteUserService implementation
pub struct DeleteUserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
    side_effects: SideEffects,
}

impl<U> DeleteUserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>, side_effects: SideEffects) -> Self {
        Self {
            user_repo,
            side_effects,
        }
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), UserError> {
        // Loaded first so the farewell notification has an address
        let user = self.user_repo.get_by_id(user_id).await?;

        self.user_repo.delete(user_id).await?;
        tracing::info!(user_id, "User deleted");

        self.side_effects
            .audit(user_id, AuditAction::Deleted, Some(format!("email: {}", user.email)))
            .await;
        self.side_effects
            .notify(&user.email, NotificationKind::AccountDeleted)
            .await;

        Ok(())
    }
}

#[async_trait]
impl<U> DeleteUserService for DeleteUserServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn delete(&self, user_id: i64) -> Result<(), UserError> {
        let result = self.delete_user(user_id).await;
        metrics::record_user_operation("delete", result.is_ok());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuditRepository, MockNotifier, User};
    use crate::infrastructure::repositories::{InMemoryAuditRepository, InMemoryUserRepository};

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let users = Arc::new(InMemoryUserRepository::new());
        let audit = Arc::new(InMemoryAuditRepository::new());
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.kind == NotificationKind::AccountDeleted && n.recipient == "alice@example.com")
            .times(1)
            .returning(|_| Ok(()));
        let service = DeleteUserServiceImpl::new(
            users.clone(),
            SideEffects::new(audit.clone(), Arc::new(notifier)),
        );
        let alice = users
            .save(&User::new("Alice", "alice@example.com", "h"))
            .await
            .unwrap();
        let id = alice.id.unwrap();

        service.delete(id).await.unwrap();

        assert!(users.get_by_id(id).await.unwrap_err().is_not_found());
        let trail = audit.list_for_user(id).await.unwrap();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].action, AuditAction::Deleted);
    }

    #[tokio::test]
    async fn test_deleting_unknown_user_is_not_found() {
        let users = Arc::new(InMemoryUserRepository::new());
        // No expectations: a notification here would panic
        let service = DeleteUserServiceImpl::new(
            users,
            SideEffects::new(Arc::new(InMemoryAuditRepository::new()), Arc::new(MockNotifier::new())),
        );

        let err = service.delete(12).await.unwrap_err();

        assert!(matches!(err, UserError::NotFound));
    }
}
