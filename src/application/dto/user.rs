//! User DTO
//!
//! Carrier for the fields one user write needs. Construction checks that
//! every field is present and trims the name; what the values must look like
//! is decided by the services.

use super::request::UserPayload;

/// Required fields that were absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);

/// Name, email and plain-text password for a create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    name: String,
    email: String,
    password: String,
}

impl UserDto {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, MissingFields> {
        Self::from_parts(Some(name.into()), Some(email.into()), Some(password.into()))
    }

    fn from_parts(
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<Self, MissingFields> {
        let mut missing = Vec::new();
        let name = required("name", name, &mut missing).trim().to_string();
        let email = required("email", email, &mut missing);
        let password = required("password", password, &mut missing);

        if !missing.is_empty() {
            return Err(MissingFields(missing));
        }

        Ok(Self {
            name,
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl TryFrom<UserPayload> for UserDto {
    type Error = MissingFields;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        Self::from_parts(payload.name, payload.email, payload.password)
    }
}

fn required(field: &'static str, value: Option<String>, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}
