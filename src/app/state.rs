// ABOUTME: Application state: the shared notification store, UI flags, and the dismissal watcher lifecycle

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::models::{Notification, NotificationId, NotificationKind};
use crate::notification::{NotificationStore, NotificationWatcher};

#[derive(Debug, Default)]
pub struct AppState {
    pub notifications: NotificationStore,
    pub should_quit: bool,
    pub help_visible: bool,
    /// Most recent post, kept so it can be repeated under a new id.
    pub last_posted: Option<Notification>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let notification = Notification::new(kind, message);
        self.last_posted = Some(notification.clone());
        self.notifications.post(notification)
    }

    /// Posts the last notification again with a fresh id.
    pub fn repost_last(&mut self) -> Option<NotificationId> {
        let again = self.last_posted.as_ref()?.repost();
        self.last_posted = Some(again.clone());
        Some(self.notifications.post(again))
    }

    /// User-initiated dismissal; harmless when nothing is showing.
    pub fn dismiss(&mut self) {
        self.notifications.clear_current_notification();
    }

    pub fn current_notification(&self) -> Option<Notification> {
        self.notifications.current_notification()
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

pub struct App {
    pub state: AppState,
    config: AppConfig,
    watcher: Option<NotificationWatcher>,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            state: AppState::new(),
            config,
            watcher: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Starts the dismissal watcher. Must run inside the tokio runtime.
    pub async fn init(&mut self) {
        self.start_watcher();
    }

    pub fn watcher_running(&self) -> bool {
        self.watcher.as_ref().is_some_and(NotificationWatcher::is_running)
    }

    pub async fn tick(&mut self) -> anyhow::Result<()> {
        // A watcher that stopped on its own would leave notifications up forever
        if self.watcher.is_some() && !self.watcher_running() {
            warn!("Notification watcher stopped unexpectedly, restarting");
            self.start_watcher();
            self.state.post(
                NotificationKind::Error,
                "Notification timer restarted after a failure",
            );
        }
        Ok(())
    }

    pub async fn shutdown(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.shutdown().await;
        }
        info!("Application shut down");
    }

    fn start_watcher(&mut self) {
        let display_duration = self.config.notifications.display_duration();
        self.watcher = Some(NotificationWatcher::spawn(
            self.state.notifications.clone(),
            display_duration,
        ));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
