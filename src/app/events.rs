// ABOUTME: Event handling system mapping keyboard input to snackbar actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::app::AppState;
use crate::models::NotificationKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    Post(NotificationKind),
    Repost,       // Same text, new id
    Dismiss,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => Some(AppEvent::Quit),
            KeyCode::Char('q') => Some(AppEvent::Quit),
            // Esc closes the snackbar first, then quits
            KeyCode::Esc if state.notifications.has_notification() => Some(AppEvent::Dismiss),
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('s') => Some(AppEvent::Post(NotificationKind::Success)),
            KeyCode::Char('e') => Some(AppEvent::Post(NotificationKind::Error)),
            KeyCode::Char('i') => Some(AppEvent::Post(NotificationKind::Info)),
            KeyCode::Char('r') => Some(AppEvent::Repost),
            KeyCode::Char('x') => Some(AppEvent::Dismiss),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::Post(kind) => {
                state.post(kind, Self::default_message(kind));
            },
            AppEvent::Repost => {
                if state.repost_last().is_none() {
                    state.post(NotificationKind::Info, "Nothing to repeat yet");
                }
            },
            AppEvent::Dismiss => state.dismiss(),
        }
    }

    fn default_message(kind: NotificationKind) -> &'static str {
        match kind {
            NotificationKind::Success => "Saved",
            NotificationKind::Error => "Failed",
            NotificationKind::Info => "Retrying",
        }
    }
}
