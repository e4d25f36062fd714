//! Presentation Layer
//!
//! HTTP routes, controllers and middleware.

pub mod http;
pub mod middleware;
