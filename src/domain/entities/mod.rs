//! # Domain Entities
//!
//! - **User**: a user account, owned by the `UserRepository`
//! - **AuditEntry**: a record of one successful user write
//!
//! Repository traits sit next to their entity and are implemented in the
//! infrastructure layer.

mod audit;
mod user;

pub use audit::{AuditAction, AuditEntry, AuditRepository};
pub use user::{User, UserRepository};

#[cfg(test)]
pub use audit::MockAuditRepository;
#[cfg(test)]
pub use user::MockUserRepository;
