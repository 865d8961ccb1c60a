// ABOUTME: UI components for the TUI interface: main layout, help overlay, and the snackbar

pub mod help;
pub mod layout;
pub mod snackbar;

pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use snackbar::{SnackbarComponent, Treatment};
