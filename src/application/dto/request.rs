//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;

/// Body of a create or update request.
///
/// Every field is optional at the wire level so that a missing field is
/// reported by DTO construction instead of a serde rejection.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

/// Query parameters for a lookup by email
#[derive(Debug, Deserialize)]
pub struct EmailLookupQuery {
    #[serde(default)]
    pub email: Option<String>,
}
