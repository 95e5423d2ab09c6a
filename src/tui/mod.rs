//! Terminal User Interface module
//!
//! Renders a wizard page with ratatui and drives it from the keyboard.
//! The same `App` state backs the headless page driver.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
