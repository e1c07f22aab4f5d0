//! Notification entity model.

use serde::{Deserialize, Serialize};

/// Severity of a notification shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Informational, plain-language message.
    Humanized,
    /// Something degraded but the screen is usable.
    Warning,
    /// An operation failed.
    Error,
}

/// A message surfaced to the operator instead of failing the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity.
    pub kind: NotificationKind,
    /// Message text.
    pub message: String,
}

impl Notification {
    /// Informational notification.
    pub fn humanized(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Humanized,
            message: message.into(),
        }
    }

    /// Warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }

    /// Error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}
