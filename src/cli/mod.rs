//! CLI command handlers
//!
//! Bridges clap argument parsing with the page driver and the action log.

pub mod log;
pub mod pages;
pub mod run;

pub use log::handle_log_command;
pub use pages::handle_pages_command;
pub use run::{handle_run_command, RunArgs};
