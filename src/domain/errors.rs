//! Repository error type.
//!
//! Every repository implementation reports failures through this enum so the
//! application layer never sees a store-specific error.

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// No record matches the requested key.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A uniqueness constraint rejected the write.
    #[error("{entity} conflicts with an existing record: {detail}")]
    Conflict { entity: &'static str, detail: String },

    /// The store could not be reached or the statement failed.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn conflict(entity: &'static str, detail: impl Into<String>) -> Self {
        Self::Conflict {
            entity,
            detail: detail.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    /// Returns true for [`RepositoryError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_key() {
        let err = RepositoryError::not_found("user", 42);
        assert_eq!(err.to_string(), "user not found: 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_conflict_is_not_not_found() {
        let err = RepositoryError::conflict("user", "email already registered");
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("email already registered"));
    }

    #[test]
    fn test_unavailable_message() {
        let err = RepositoryError::unavailable("connection refused");
        assert_eq!(err.to_string(), "store unavailable: connection refused");
    }
}
