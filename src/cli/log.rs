//! `stepform log`

use std::io::Write;

use crate::actions::{export_entries, ActionLogger, ExportFormat};
use crate::config::StepformPaths;
use crate::error::StepformResult;

/// Print the most recent `limit` actions
pub fn handle_log_command<W: Write>(
    paths: &StepformPaths,
    limit: usize,
    format: ExportFormat,
    out: &mut W,
) -> StepformResult<()> {
    let logger = ActionLogger::new(paths.action_log());
    let entries = if logger.exists() {
        logger.read_recent(limit)?
    } else {
        Vec::new()
    };
    export_entries(&entries, format, out)
}
