// ABOUTME: End-to-end timing tests for the store and dismissal watcher on a paused tokio clock

use snackbar::models::{Notification, NotificationKind};
use snackbar::notification::{NotificationStore, NotificationWatcher, DEFAULT_DISPLAY_DURATION};
use std::time::Duration;
use tokio::time::sleep;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Counts every transition of the store to empty, however it happened.
fn count_clears(store: &NotificationStore) -> tokio::sync::watch::Receiver<usize> {
    let mut rx = store.subscribe();
    let (tx, count) = tokio::sync::watch::channel(0usize);
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            if rx.borrow_and_update().is_none() {
                tx.send_modify(|n| *n += 1);
            }
        }
    });
    count
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_saved_notification_clears_after_five_seconds() {
    let store = NotificationStore::new();
    let clears = count_clears(&store);
    let _watcher = NotificationWatcher::spawn(store.clone(), DEFAULT_DISPLAY_DURATION);

    let id = store.post(Notification::success("Saved"));

    sleep(ms(4999)).await;
    assert_eq!(store.current_notification().map(|n| n.id()), Some(id));

    sleep(ms(2)).await;
    assert!(store.current_notification().is_none());
    assert_eq!(*clears.borrow(), 1);

    sleep(ms(20_000)).await;
    assert_eq!(*clears.borrow(), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_retry_replaces_failure_and_clears_at_seven_seconds() {
    let store = NotificationStore::new();
    let clears = count_clears(&store);
    let _watcher = NotificationWatcher::spawn(store.clone(), DEFAULT_DISPLAY_DURATION);

    store.post_message(NotificationKind::Error, "Failed");
    sleep(ms(2000)).await;
    let retry = store.post_message(NotificationKind::Info, "Retrying");

    sleep(ms(3001)).await;
    assert_eq!(
        store.current_notification().map(|n| n.id()),
        Some(retry),
        "the first timer must not clear the replacement at +5000ms"
    );
    assert_eq!(*clears.borrow(), 0);

    sleep(ms(1998)).await;
    assert!(store.current_notification().is_some());

    sleep(ms(2)).await;
    assert!(store.current_notification().is_none());
    assert_eq!(*clears.borrow(), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_manual_dismiss_neutralizes_timer() {
    let store = NotificationStore::new();
    let clears = count_clears(&store);
    let _watcher = NotificationWatcher::spawn(store.clone(), DEFAULT_DISPLAY_DURATION);

    store.post(Notification::success("Saved"));
    sleep(ms(500)).await;
    store.clear_current_notification();

    sleep(ms(10_000)).await;
    assert!(store.current_notification().is_none());
    assert_eq!(*clears.borrow(), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_new_post_after_manual_dismiss_gets_full_window() {
    let store = NotificationStore::new();
    let _watcher = NotificationWatcher::spawn(store.clone(), DEFAULT_DISPLAY_DURATION);

    store.post(Notification::error("Failed"));
    sleep(ms(500)).await;
    store.clear_current_notification();
    sleep(ms(500)).await;
    let id = store.post(Notification::error("Failed"));

    // The first post's deadline (+5000ms) passes without effect
    sleep(ms(4500)).await;
    assert_eq!(store.current_notification().map(|n| n.id()), Some(id));

    sleep(ms(600)).await;
    assert!(store.current_notification().is_none());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_repost_with_same_text_rearms() {
    let store = NotificationStore::new();
    let _watcher = NotificationWatcher::spawn(store.clone(), DEFAULT_DISPLAY_DURATION);

    let first = Notification::info("Retrying");
    store.post(first.clone());
    sleep(ms(3000)).await;
    let second = store.post(first.repost());

    sleep(ms(2500)).await;
    assert_eq!(store.current_notification().map(|n| n.id()), Some(second));

    sleep(ms(2501)).await;
    assert!(store.current_notification().is_none());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_shutdown_prevents_later_dismissal() {
    let store = NotificationStore::new();
    let watcher = NotificationWatcher::spawn(store.clone(), DEFAULT_DISPLAY_DURATION);

    let id = store.post(Notification::success("Saved"));
    sleep(ms(500)).await;
    assert!(watcher.is_running());
    watcher.shutdown().await;

    sleep(ms(10_000)).await;
    assert_eq!(store.current_notification().map(|n| n.id()), Some(id));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_watcher_picks_up_notification_posted_before_spawn() {
    let store = NotificationStore::new();
    store.post(Notification::success("Saved"));

    let _watcher = NotificationWatcher::spawn(store.clone(), ms(1000));

    sleep(ms(1001)).await;
    assert!(store.current_notification().is_none());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_watcher_runs_until_stopped_even_without_other_store_handles() {
    let store = NotificationStore::new();
    store.post(Notification::info("Retrying"));
    let watcher = NotificationWatcher::spawn(store.clone(), ms(1000));
    let mut rx = store.subscribe();
    drop(store);

    // The watcher's own handle keeps the channel open, so its loop never ends on its own
    sleep(ms(1001)).await;
    assert!(rx.borrow_and_update().is_none());
    sleep(ms(10_000)).await;
    assert!(watcher.is_running());

    watcher.shutdown().await;
    assert!(rx.changed().await.is_err(), "shutdown releases the last sender");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_dropping_watcher_cancels_pending_dismissal() {
    let store = NotificationStore::new();
    let watcher = NotificationWatcher::spawn(store.clone(), ms(1000));

    let id = store.post(Notification::success("Saved"));
    sleep(ms(500)).await;
    drop(watcher);

    sleep(ms(5000)).await;
    assert_eq!(store.current_notification().map(|n| n.id()), Some(id));
}
