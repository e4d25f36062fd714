//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the domain
//! layer. Services only ever see the traits, so the backend can be switched
//! through configuration.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** / **InMemoryUserRepository** - user accounts
//! - **PgAuditRepository** / **InMemoryAuditRepository** - audit log
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sqlx::PgPool;
//! use crate::domain::UserRepository;
//! use crate::infrastructure::repositories::{InMemoryUserRepository, PgUserRepository};
//!
//! fn select(pool: Option<PgPool>) -> Arc<dyn UserRepository> {
//!     match pool {
//!         Some(pool) => Arc::new(PgUserRepository::new(pool)),
//!         None => Arc::new(InMemoryUserRepository::new()),
//!     }
//! }
//! ```

pub mod audit_repository;
pub mod memory;
pub mod user_repository;

pub use audit_repository::PgAuditRepository;
pub use memory::{InMemoryAuditRepository, InMemoryUserRepository};
pub use user_repository::PgUserRepository;
