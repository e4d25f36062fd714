//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database connection pool and migrations (PostgreSQL)
//! - Repository implementations (PostgreSQL and in-memory)
//! - Notification delivery
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod notifications;
pub mod repositories;
