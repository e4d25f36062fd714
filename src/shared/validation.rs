//! Validation Utilities

use super::error::{AppError, FieldError};
use crate::application::services::RuleViolation;

/// Convert rule violations to AppError
pub fn validation_error(violations: Vec<RuleViolation>) -> AppError {
    let errors: Vec<FieldError> = violations
        .into_iter()
        .map(|v| FieldError {
            field: v.field.to_string(),
            message: v.message,
        })
        .collect();

    let message = errors
        .first()
        .map(|e| format!("{}: {}", e.field, e.message))
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation { message, errors }
}
