// ABOUTME: Core data models for snackbar notifications

pub mod notification;

pub use notification::{Notification, NotificationId, NotificationKind};
