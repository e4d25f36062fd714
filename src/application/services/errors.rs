//! User service errors

use serde::Serialize;

use crate::domain::RepositoryError;

/// One business rule a DTO broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    pub field: &'static str,
    pub message: String,
}

impl RuleViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors returned by every user service.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Validation failed: {}", describe(.0))]
    Validation(Vec<RuleViolation>),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn describe(violations: &[RuleViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Self::NotFound,
            RepositoryError::Conflict { .. } => Self::EmailTaken,
            RepositoryError::StoreUnavailable(msg) => Self::StoreUnavailable(msg),
        }
    }
}
