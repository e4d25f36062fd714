//! Data Transfer Objects
//!
//! - `request`: wire shapes of request bodies and query strings
//! - `user`: the DTO handed from controllers to services
//! - `response`: wire shapes of response bodies

pub mod request;
pub mod response;
pub mod user;

pub use request::{EmailLookupQuery, UserPayload};
pub use response::{AuditEntryResponse, UserListResponse, UserResponse};
pub use user::{MissingFields, UserDto};
