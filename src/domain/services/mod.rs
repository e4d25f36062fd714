//! Domain Services
//!
//! Ports for collaborators that application services call after a write.

pub mod notifier;

pub use notifier::{Notification, NotificationError, NotificationKind, Notifier};

#[cfg(test)]
pub use notifier::MockNotifier;
