// ABOUTME: Snackbar notification core: the store, the dismissal timer controller, and the watcher binding them
// The controller guarantees at most one pending dismissal tied to the current notification

pub mod controller;
pub mod source;
pub mod store;
pub mod watcher;

pub use controller::{DismissController, DEFAULT_DISPLAY_DURATION};
pub use source::NotificationSource;
pub use store::NotificationStore;
pub use watcher::NotificationWatcher;
