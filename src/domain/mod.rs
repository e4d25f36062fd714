//! # Domain Layer
//!
//! Entities, repository traits and side-effect ports. Nothing in here knows
//! about HTTP, SQL or configuration.
//!
//! ## Structure
//!
//! - **entities**: `User` and `AuditEntry` with their repository traits
//! - **services**: ports for side effects (notifications)
//! - **errors**: the error type every repository reports

pub mod entities;
pub mod errors;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use errors::RepositoryError;
pub use services::*;
