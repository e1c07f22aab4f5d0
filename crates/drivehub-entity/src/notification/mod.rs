//! User-facing notifications.

pub mod model;

pub use model::{Notification, NotificationKind};
