//! HTTP API
//!
//! Controllers and route table for the REST surface.

pub mod handlers;
pub mod routes;
