//! Stepform - terminal multi-step wizard with validated form steps
//!
//! This library provides the wizard state machine, the ratatui front end
//! that renders it, and a headless page driver that exercises the same
//! front end from tests and scripts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `wizard`: Step controller, page definitions and focus order
//! - `tui`: Interactive terminal UI
//! - `harness`: Headless page driver and element selectors
//! - `actions`: Append-only log of wizard requests
//! - `config`: Paths, settings and display strings
//! - `cli`: Command handlers for the `stepform` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use stepform::harness::{PageDriver, Selector};
//!
//! let mut page = PageDriver::open("/wizard/native-form-submit")?;
//! page.click(&Selector::test_id("first-name-input"))?;
//! page.keys(&["Enter"])?;
//! ```

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod harness;
pub mod tui;
pub mod wizard;

pub use error::{StepformError, StepformResult};
