//! Update User Service
//!
//! Replaces a user's name, email and password.

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

/// Update user service trait
#[async_trait]
pub trait UpdateUserService: Send + Sync {
    /// Overwrite the user's fields with the DTO's
    async fn update(&self, user_id: i64, dto: UserDto) -> Result<User, UserError>;
}

/// UpdateUserService implementation
pub struct UpdateUserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
    side_effects: SideEffects,
    rules: UserRules,
}

impl<U> UpdateUserServiceImpl<U>
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

    async fn update_user(&self, user_id: i64, dto: UserDto) -> Result<User, UserError> {
        check_user(&dto, &self.rules)?;

        let existing = self.user_repo.get_by_id(user_id).await?;

        if dto.email() != existing.email {
            match self.user_repo.get_by_email(dto.email()).await {
                Ok(owner) if owner.id != Some(user_id) => return Err(UserError::EmailTaken),
                Ok(_) => {}
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e.into()),
            }
        }

        let mut changed = Vec::new();
        if dto.name() != existing.name {
            changed.push("name");
        }
        if dto.email() != existing.email {
            changed.push("email");
        }

        let user = User {
            name: dto.name().to_string(),
            email: dto.email().to_string(),
            password_hash: hash_password(dto.password())?,
            ..existing
        };

        let updated = self.user_repo.save(&user).await?;
        tracing::info!(user_id, changed = ?changed, "User updated");

        let detail = (!changed.is_empty()).then(|| format!("changed: {}", changed.join(", ")));
        self.side_effects.audit(user_id, AuditAction::Updated, detail).await;
        self.side_effects
            .notify(&updated.email, NotificationKind::ProfileUpdated)
            .await;

        Ok(updated)
    }
}

#[async_trait]
impl<U> UpdateUserService for UpdateUserServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn update(&self, user_id: i64, dto: UserDto) -> Result<User, UserError> {
        let result = self.update_user(user_id, dto).await;
        metrics::record_user_operation("update", result.is_ok());
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::application::services::password::verify_password;
    use crate::domain::{AuditRepository, MockUserRepository, RepositoryError};
    use crate::infrastructure::notifications::TracingNotifier;
    use crate::infrastructure::repositories::{InMemoryAuditRepository, InMemoryUserRepository};

    struct Fixture {
        users: Arc<InMemoryUserRepository>,
        audit: Arc<InMemoryAuditRepository>,
        service: UpdateUserServiceImpl<InMemoryUserRepository>,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(InMemoryUserRepository::new());
        let audit = Arc::new(InMemoryAuditRepository::new());
        let side_effects = SideEffects::new(audit.clone(), Arc::new(TracingNotifier));
        let service = UpdateUserServiceImpl::new(users.clone(), side_effects, UserRules::default());
        Fixture {
            users,
            audit,
            service,
        }
    }

    async fn seed(users: &InMemoryUserRepository, name: &str, email: &str) -> User {
        users
            .save(&User::new(name, email, hash_password("secret123").unwrap()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_identity() {
        let f = fixture();
        let alice = seed(&f.users, "Alice", "alice@example.com").await;
        let dto = UserDto::new("Alice Smith", "alice.smith@example.com", "newsecret9").unwrap();

        let updated = f.service.update(alice.id.unwrap(), dto).await.unwrap();

        assert_eq!(updated.id, alice.id);
        assert_eq!(updated.name, "Alice Smith");
        assert_eq!(updated.email, "alice.smith@example.com");
        assert_eq!(updated.created_at, alice.created_at);
        assert!(verify_password("newsecret9", &updated.password_hash).unwrap());

        let audit = f.audit.list_for_user(alice.id.unwrap()).await.unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].action, AuditAction::Updated);
        assert_eq!(audit[0].detail.as_deref(), Some("changed: name, email"));
    }

    #[tokio::test]
    async fn test_keeping_own_email_is_allowed() {
        let f = fixture();
        let alice = seed(&f.users, "Alice", "alice@example.com").await;
        let dto = UserDto::new("Alice", "alice@example.com", "rotated99").unwrap();

        let updated = f.service.update(alice.id.unwrap(), dto).await.unwrap();

        assert_eq!(updated.email, "alice@example.com");
        let audit = f.audit.list_for_user(alice.id.unwrap()).await.unwrap();
        assert_eq!(audit[0].detail, None);
    }

    #[tokio::test]
    async fn test_taking_another_users_email_is_rejected() {
        let f = fixture();
        seed(&f.users, "Alice", "alice@example.com").await;
        let bob = seed(&f.users, "Bob", "bob@example.com").await;
        let dto = UserDto::new("Bob", "alice@example.com", "secret123").unwrap();

        let err = f.service.update(bob.id.unwrap(), dto).await.unwrap_err();

        assert!(matches!(err, UserError::EmailTaken));
        let unchanged = f.users.get_by_id(bob.id.unwrap()).await.unwrap();
        assert_eq!(unchanged.email, "bob@example.com");
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let f = fixture();
        let dto = UserDto::new("Ghost", "ghost@example.com", "secret123").unwrap();

        let err = f.service.update(404, dto).await.unwrap_err();

        assert!(matches!(err, UserError::NotFound));
    }

    #[tokio::test]
    async fn test_invalid_update_is_rejected_without_store_access() {
        let repo = Arc::new(MockUserRepository::new());
        let side_effects = SideEffects::new(
            Arc::new(InMemoryAuditRepository::new()),
            Arc::new(TracingNotifier),
        );
        let service = UpdateUserServiceImpl::new(repo, side_effects, UserRules::default());
        let dto = UserDto::new("Alice", "alice@example.com", "nodigits").unwrap();

        let err = service.update(1, dto).await.unwrap_err();

        assert!(matches!(err, UserError::Validation(_)));
    }

    #[tokio::test]
    async fn test_store_outage_during_save_is_reported() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id().returning(|id| {
            let mut user = User::new("Alice", "alice@example.com", "h");
            user.id = Some(id);
            Ok(user)
        });
        repo.expect_save()
            .returning(|_| Err(RepositoryError::unavailable("write failed")));
        let side_effects = SideEffects::new(
            Arc::new(InMemoryAuditRepository::new()),
            Arc::new(TracingNotifier),
        );
        let service = UpdateUserServiceImpl::new(Arc::new(repo), side_effects, UserRules::default());
        let dto = UserDto::new("Alice", "alice@example.com", "secret123").unwrap();

        let err = service.update(1, dto).await.unwrap_err();

        assert!(matches!(err, UserError::StoreUnavailable(_)));
    }
}
