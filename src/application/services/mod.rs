//! Application Services
//!
//! One service per operation, each with a single public method. Each is a
//! trait plus an `...Impl` that receives its repository and side-effect
//! collaborators at construction.
//!
//! ## Available Services
//!
//! - **CreateUserService**: validate, hash, store, then audit and welcome
//! - **UpdateUserService**: replace a user's fields
//! - **DeleteUserService**: remove an account
//! - **ListUsersService**, **GetUserService**, **FindUserByEmailService**,
//!   **AuditTrailService**: reads for the controllers

pub mod audit_trail;
pub mod create_user;
pub mod delete_user;
pub mod errors;
pub mod find_user_by_email;
pub mod get_user;
pub mod list_users;
pub mod password;
pub mod rules;
pub mod side_effects;
pub mod update_user;

pub use audit_trail::{AuditTrailService, AuditTrailServiceImpl};
pub use create_user::{CreateUserService, CreateUserServiceImpl};
pub use delete_user::{DeleteUserService, DeleteUserServiceImpl};
pub use errors::{RuleViolation, UserError};
pub use find_user_by_email::{FindUserByEmailService, FindUserByEmailServiceImpl};
pub use get_user::{GetUserService, GetUserServiceImpl};
pub use list_users::{ListUsersService, ListUsersServiceImpl};
pub use side_effects::SideEffects;
pub use update_user::{UpdateUserService, UpdateUserServiceImpl};
