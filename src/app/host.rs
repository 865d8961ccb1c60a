// ABOUTME: Host event loop plumbing: terminal input read off the runtime thread, UI ticks, and store changes
// Blocking input polls run on the blocking pool so dismissal timers on the runtime thread fire on time

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{debug, error};

use crate::app::{App, EventHandler};
use crate::models::{Notification, NotificationKind};
use crate::notification::NotificationStore;

/// Upper bound on how long the reader blocks before checking for shutdown.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Reads one key press from the terminal, waiting at most `timeout`.
pub fn read_terminal_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key_event) = event::read()? {
            if key_event.kind == KeyEventKind::Press {
                return Ok(Some(key_event));
            }
        }
    }
    Ok(None)
}

/// Runs a blocking key reader on tokio's blocking pool and forwards key
/// presses over a channel.
pub struct InputReader {
    keys: mpsc::UnboundedReceiver<KeyEvent>,
    stop: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl InputReader {
    /// `read_key` is called repeatedly with [`INPUT_POLL_INTERVAL`] and may
    /// block for up to that long.
    pub fn spawn<F>(mut read_key: F) -> Self
    where
        F: FnMut(Duration) -> io::Result<Option<KeyEvent>> + Send + 'static,
    {
        let (tx, keys) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let task = tokio::task::spawn_blocking(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                match read_key(INPUT_POLL_INTERVAL) {
                    Ok(Some(key_event)) => {
                        if tx.send(key_event).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        error!("Failed to read terminal input: {}", e);
                        break;
                    }
                }
            }
            debug!("Input reader stopped");
        });

        Self {
            keys,
            stop,
            task: Some(task),
        }
    }

    /// Next key press, or `None` once the reader has stopped.
    pub async fn recv(&mut self) -> Option<KeyEvent> {
        self.keys.recv().await
    }

    /// Stops the reader and waits for its thread to finish.
    pub async fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// One wake-up of the host loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Key(KeyEvent),
    Tick,
    /// The current notification was posted, replaced, or cleared.
    NotificationChanged,
}

/// Merges key presses, the UI tick, and store changes into one stream.
pub struct HostEvents {
    input: InputReader,
    ticker: Interval,
    notifications: watch::Receiver<Option<Notification>>,
}

impl HostEvents {
    pub fn new(input: InputReader, tick_rate: Duration, store: &NotificationStore) -> Self {
        let mut ticker = interval(tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            input,
            ticker,
            notifications: store.subscribe(),
        }
    }

    /// Waits for the next event without blocking the runtime thread.
    /// Returns `None` when the input reader has stopped.
    pub async fn next(&mut self) -> Option<HostEvent> {
        tokio::select! {
            key = self.input.recv() => key.map(HostEvent::Key),
            _ = self.ticker.tick() => Some(HostEvent::Tick),
            changed = self.notifications.changed() => {
                // The store lives as long as the app, so this only fails during teardown
                changed.ok().map(|()| HostEvent::NotificationChanged)
            }
        }
    }

    /// Stops the input reader; call before restoring the terminal.
    pub async fn stop(self) {
        self.input.stop().await;
    }
}

/// Applies one host event to the app. This is the body of the main loop
/// between frames.
pub async fn step(app: &mut App, event: HostEvent) {
    match event {
        HostEvent::Key(key_event) => {
            if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                EventHandler::process_event(app_event, &mut app.state);
            }
        }
        HostEvent::Tick => {
            if let Err(e) = app.tick().await {
                error!("Error during app tick: {}", e);
                app.state.post(NotificationKind::Error, format!("Error: {e}"));
            }
        }
        // Nothing to update; the caller redraws
        HostEvent::NotificationChanged => {}
    }
}
