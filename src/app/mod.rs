// ABOUTME: Main application structure and state management for the snackbar TUI

pub mod state;
pub mod events;
pub mod host;

pub use state::{App, AppState};
pub use events::{AppEvent, EventHandler};
pub use host::{HostEvent, HostEvents, InputReader};
