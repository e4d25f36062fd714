//! Shared Utilities
//!
//! Error mapping used by the presentation layer.

pub mod error;
pub mod validation;
