// ABOUTME: Binds a dismissal controller to the store's change subscription
// The watcher task owns the controller, so stopping the task also cancels any pending dismissal

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

use super::{DismissController, NotificationStore};

/// Background task that re-arms dismissal whenever the store changes.
pub struct NotificationWatcher {
    task: Option<JoinHandle<()>>,
}

impl NotificationWatcher {
    /// Starts observing `store`. Must be called from within a tokio runtime.
    pub fn spawn(store: NotificationStore, display_duration: Duration) -> Self {
        let mut rx = store.subscribe();
        let mut controller =
            DismissController::new(Arc::new(store)).with_display_duration(display_duration);

        info!("Starting notification watcher ({:?} display time)", display_duration);
        let task = tokio::spawn(async move {
            let initial = rx.borrow_and_update().clone();
            controller.observe(initial.as_ref());

            // The controller holds a store handle, so the sender outlives this
            // loop. It ends only through abort (shutdown or Drop) or a panic,
            // and either way dropping the controller cancels its timer.
            while rx.changed().await.is_ok() {
                let current = rx.borrow_and_update().clone();
                controller.observe(current.as_ref());
            }
        });

        Self { task: Some(task) }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops the watcher and waits until its controller is gone, so no
    /// dismissal can fire once this returns.
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            info!("Stopping notification watcher");
            task.abort();
            let _ = task.await;
        }
    }
}

impl Drop for NotificationWatcher {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
