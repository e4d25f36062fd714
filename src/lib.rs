//! # User Registry Library
//!
//! This crate provides a small user-management service with:
//! - RESTful HTTP API endpoints for a `User` resource
//! - PostgreSQL or in-memory storage behind one repository trait
//! - An audit trail and account notifications after each write
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, repository and notifier traits
//! - **Application Layer**: DTOs, validation rules and services
//! - **Infrastructure Layer**: Database, in-memory store, metrics, notifiers
//! - **Presentation Layer**: HTTP controllers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! user_registry/
//! +-- config/         Configuration management
//! +-- domain/         Entities, errors and collaborator traits
//! +-- application/    DTOs and services
//! +-- infrastructure/ Repository, metrics and notifier implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         HTTP error mapping
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
