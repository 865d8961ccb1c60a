// ABOUTME: Capability the dismissal controller consumes from whatever holds the current notification

use crate::models::{Notification, NotificationId};

#[cfg(test)]
use mockall::automock;

/// Read access to the current notification plus the clear path.
///
/// Implementations must make both clear methods idempotent: clearing when
/// nothing is current is a no-op.
#[cfg_attr(test, automock)]
pub trait NotificationSource {
    fn current_notification(&self) -> Option<Notification>;

    fn clear_current_notification(&self);

    /// Clears the notification only while `id` is still the current one.
    ///
    /// Sources that cannot compare identities fall back to an unconditional clear.
    fn clear_notification(&self, _id: NotificationId) {
        self.clear_current_notification();
    }
}
