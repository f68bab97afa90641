//! Dialog components for the TUI
//!
//! Modal dialogs drawn over the main screen

pub mod alert;
pub mod help;
