//! Business rules for user writes.

use validator::{ValidateEmail, ValidateLength};

use super::errors::{RuleViolation, UserError};
use crate::application::dto::UserDto;
use crate::config::UserRules;

/// Longest email accepted (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: u64 = 254;

/// Longest password accepted; Argon2 input beyond this is pointless work
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Check a DTO against the configured rules, reporting every violation.
pub fn check_user(dto: &UserDto, rules: &UserRules) -> Result<(), UserError> {
    let mut violations = Vec::new();

    if !dto
        .name()
        .validate_length(Some(1), Some(rules.max_name_length), None)
    {
        violations.push(RuleViolation::new(
            "name",
            format!("Name must be 1-{} characters", rules.max_name_length),
        ));
    }

    let email = dto.email();
    if !email.validate_length(None, Some(MAX_EMAIL_LENGTH), None) {
        violations.push(RuleViolation::new(
            "email",
            format!("Email must be at most {} characters", MAX_EMAIL_LENGTH),
        ));
    } else if !email.validate_email() {
        violations.push(RuleViolation::new("email", "Invalid email format"));
    }

    let password = dto.password();
    if !password.validate_length(Some(rules.min_password_length), None, None) {
        violations.push(RuleViolation::new(
            "password",
            format!(
                "Password must be at least {} characters",
                rules.min_password_length
            ),
        ));
    }
    if !password.validate_length(None, Some(MAX_PASSWORD_LENGTH), None) {
        violations.push(RuleViolation::new(
            "password",
            format!("Password must be at most {} characters", MAX_PASSWORD_LENGTH),
        ));
    }
    if !password.chars().any(char::is_alphabetic) {
        violations.push(RuleViolation::new("password", "Password must contain a letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(RuleViolation::new("password", "Password must contain a digit"));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(UserError::Validation(violations))
    }
}
