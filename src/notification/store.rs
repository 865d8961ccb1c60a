// ABOUTME: Process-wide holder of the single current notification
// Backed by a tokio watch channel so views and the dismissal watcher can subscribe to changes

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

use super::NotificationSource;
use crate::models::{Notification, NotificationId, NotificationKind};

/// Cheaply cloneable handle; every clone shares the same current notification.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    current: Arc<watch::Sender<Option<Notification>>>,
}

impl NotificationStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            current: Arc::new(tx),
        }
    }

    /// Makes `notification` current, replacing whatever was showing.
    pub fn post(&self, notification: Notification) -> NotificationId {
        let id = notification.id();
        info!(
            "Posting {} notification {}: {}",
            notification.kind, id, notification.message
        );
        self.current.send_replace(Some(notification));
        id
    }

    pub fn post_message(&self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        self.post(Notification::new(kind, message))
    }

    pub fn current_notification(&self) -> Option<Notification> {
        self.current.borrow().clone()
    }

    pub fn has_notification(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Clears the current notification. Subscribers are only notified when
    /// something was actually removed.
    pub fn clear_current_notification(&self) {
        let cleared = self.current.send_if_modified(|current| current.take().is_some());
        if cleared {
            debug!("Cleared current notification");
        }
    }

    /// Clears only if `id` is still current. Returns whether anything was removed.
    pub fn clear_if_current(&self, id: NotificationId) -> bool {
        let cleared = self.current.send_if_modified(|current| {
            if current.as_ref().is_some_and(|n| n.id() == id) {
                *current = None;
                true
            } else {
                false
            }
        });

        if cleared {
            debug!("Cleared notification {}", id);
        } else {
            debug!("Notification {} no longer current, nothing to clear", id);
        }
        cleared
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.current.subscribe()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSource for NotificationStore {
    fn current_notification(&self) -> Option<Notification> {
        NotificationStore::current_notification(self)
    }

    fn clear_current_notification(&self) {
        NotificationStore::clear_current_notification(self);
    }

    fn clear_notification(&self, id: NotificationId) {
        self.clear_if_current(id);
    }
}
