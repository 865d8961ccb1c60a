// ABOUTME: Real-clock tests for the host loop: dismissal timers must fire on time while input polling blocks

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use snackbar::app::host::{self, HostEvent};
use snackbar::app::{App, HostEvents, InputReader};
use snackbar::config::AppConfig;
use snackbar::models::NotificationKind;
use std::time::{Duration, Instant};

const DISPLAY_MS: u64 = 300;
const TOLERANCE_MS: u64 = 200;

/// Delivers `key` once, then behaves like a terminal with nobody typing:
/// every poll blocks for its whole timeout.
fn idle_terminal_after(key: char) -> impl FnMut(Duration) -> std::io::Result<Option<KeyEvent>> + Send + 'static {
    let mut pending = Some(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE));
    move |timeout| {
        if let Some(key_event) = pending.take() {
            return Ok(Some(key_event));
        }
        std::thread::sleep(timeout);
        Ok(None)
    }
}

fn app_with(display_ms: u64, tick_rate_ms: u64) -> App {
    let mut config = AppConfig::default();
    config.notifications.display_duration_ms = display_ms;
    config.ui.tick_rate_ms = tick_rate_ms;
    App::with_config(config)
}

/// Runs the same per-iteration step as `main.rs` until the posted
/// notification disappears; returns the time from post to clear.
async fn run_until_cleared(app: &mut App, events: &mut HostEvents) -> Duration {
    let mut posted_at = None;
    loop {
        let event = events.next().await.expect("host events ended early");
        let is_key = matches!(event, HostEvent::Key(_));
        host::step(app, event).await;

        if is_key && posted_at.is_none() {
            posted_at = Some(Instant::now());
        }
        if let Some(posted_at) = posted_at {
            if app.state.current_notification().is_none() {
                return posted_at.elapsed();
            }
        }
    }
}

async fn assert_dismissal_on_time(tick_rate_ms: u64) {
    let mut app = app_with(DISPLAY_MS, tick_rate_ms);
    app.init().await;

    let input = InputReader::spawn(idle_terminal_after('s'));
    let mut events = HostEvents::new(input, app.config().ui.tick_rate(), &app.state.notifications);

    let elapsed = tokio::time::timeout(
        Duration::from_secs(5),
        run_until_cleared(&mut app, &mut events),
    )
    .await
    .expect("notification was never cleared while the host loop was waiting");

    assert!(
        elapsed >= Duration::from_millis(DISPLAY_MS - 20),
        "cleared too early: {:?}",
        elapsed
    );
    assert!(
        elapsed <= Duration::from_millis(DISPLAY_MS + TOLERANCE_MS),
        "tick rate {}ms delayed the dismissal: cleared after {:?}",
        tick_rate_ms,
        elapsed
    );

    events.stop().await;
    app.shutdown().await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_dismissal_on_time_with_short_tick() {
    assert_dismissal_on_time(250).await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_dismissal_on_time_when_tick_is_much_longer_than_display() {
    assert_dismissal_on_time(10_000).await;
}

#[tokio::test(flavor = "current_thread")]
async fn test_store_change_wakes_the_loop_before_the_next_tick() {
    let mut app = app_with(DISPLAY_MS, 10_000);
    app.init().await;

    let input = InputReader::spawn(|timeout| {
        std::thread::sleep(timeout);
        Ok(None)
    });
    let mut events = HostEvents::new(input, app.config().ui.tick_rate(), &app.state.notifications);

    // Interval ticks once immediately
    assert_eq!(events.next().await, Some(HostEvent::Tick));

    app.state.post(NotificationKind::Info, "Retrying");
    let started = Instant::now();
    assert_eq!(events.next().await, Some(HostEvent::NotificationChanged));

    // The clear wakes the loop long before the 10s tick
    assert_eq!(events.next().await, Some(HostEvent::NotificationChanged));
    assert!(app.state.current_notification().is_none());
    assert!(started.elapsed() < Duration::from_millis(DISPLAY_MS + TOLERANCE_MS));

    events.stop().await;
    app.shutdown().await;
}
