//! Action log for wizard sessions
//!
//! Every navigation, submit and cancel request is recorded with its outcome
//! (applied or blocked by validation) in an append-only JSONL file.
//!
//! - `ActionEntry`: one handled request with timestamp and session id
//! - `ActionLogger`: appends and reads the log file
//! - `export_entries`: text, JSON or CSV output for `stepform log`

mod entry;
mod export;
mod logger;

pub use entry::{ActionEntry, ActionKind, Outcome};
pub use export::{export_entries, ExportFormat};
pub use logger::ActionLogger;
