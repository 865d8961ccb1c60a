// ABOUTME: Dismissal timer controller that clears each current notification after a fixed display duration
// Owns at most one pending timer; any change in the observed notification cancels it before rearming

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use super::NotificationSource;
use crate::models::{Notification, NotificationId};

/// How long a notification stays up when nothing else clears it.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_millis(5000);

/// Arms a single dismissal timer for whichever notification is current.
///
/// Timers are tokio tasks, so `observe` must be called from within a runtime.
/// The host runs a current-thread runtime, which means an aborted timer task is
/// never polled again.
pub struct DismissController<S> {
    source: Arc<S>,
    display_duration: Duration,
    observed: Option<NotificationId>,
    pending: Option<JoinHandle<()>>,
}

impl<S> DismissController<S>
where
    S: NotificationSource + Send + Sync + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            display_duration: DEFAULT_DISPLAY_DURATION,
            observed: None,
            pending: None,
        }
    }

    #[must_use]
    pub fn with_display_duration(mut self, display_duration: Duration) -> Self {
        self.display_duration = display_duration;
        self
    }

    pub fn display_duration(&self) -> Duration {
        self.display_duration
    }

    /// Reacts to the current notification. Only a change of identity matters:
    /// observing the same id again leaves the running timer alone.
    pub fn observe(&mut self, current: Option<&Notification>) {
        let next = current.map(Notification::id);
        if next == self.observed {
            return;
        }

        self.cancel();
        self.observed = next;

        if let Some(id) = next {
            self.arm(id);
        }
    }

    /// Reads the current notification from the source and observes it.
    pub fn sync(&mut self) {
        let current = self.source.current_notification();
        self.observe(current.as_ref());
    }

    /// Id the controller last reacted to, even if its timer already fired.
    pub fn observed(&self) -> Option<NotificationId> {
        self.observed
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stops observing; no dismissal fires after this returns.
    pub fn dispose(&mut self) {
        self.cancel();
        self.observed = None;
    }

    fn arm(&mut self, id: NotificationId) {
        let deadline = Instant::now() + self.display_duration;
        let source = Arc::clone(&self.source);

        debug!("Arming dismissal of {} in {:?}", id, self.display_duration);
        self.pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            debug!("Display time elapsed for {}", id);
            source.clear_notification(id);
        }));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("Cancelling pending dismissal of {:?}", self.observed);
            }
            handle.abort();
        }
    }
}

impl<S> Drop for DismissController<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
