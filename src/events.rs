//! Notification events emitted by the game state store.
//!
//! These are fire-and-forget: the store pushes them into a bounded queue
//! and a display layer outside this crate drains them. Game logic never
//! depends on whether anyone is listening.

use serde::{Deserialize, Serialize};

/// Severity/flavor of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Reward,
}

/// A single user-facing notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
