//! Action log export
//!
//! Writes entries as plain text lines, pretty JSON or CSV.

use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{StepformError, StepformResult};

use super::entry::ActionEntry;

/// Output format for `stepform log`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = StepformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(StepformError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    timestamp: String,
    session_id: String,
    page: &'a str,
    action: String,
    reason: String,
    starting_index: usize,
    requested_index: String,
    outcome: String,
    result_text: &'a str,
}

impl<'a> From<&'a ActionEntry> for CsvRow<'a> {
    fn from(entry: &'a ActionEntry) -> Self {
        Self {
            timestamp: entry.timestamp.to_rfc3339(),
            session_id: entry.session_id.to_string(),
            page: &entry.page,
            action: entry.action.to_string().to_lowercase(),
            reason: entry
                .reason
                .and_then(|r| serde_json::to_value(r).ok())
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default(),
            starting_index: entry.starting_index,
            requested_index: entry
                .requested_index
                .map(|i| i.to_string())
                .unwrap_or_default(),
            outcome: entry.outcome.to_string(),
            result_text: &entry.result_text,
        }
    }
}

/// Write entries in the given format
pub fn export_entries<W: Write>(
    entries: &[ActionEntry],
    format: ExportFormat,
    writer: &mut W,
) -> StepformResult<()> {
    match format {
        ExportFormat::Text => {
            if entries.is_empty() {
                writeln!(writer, "No actions recorded.")?;
            }
            for entry in entries {
                writeln!(writer, "{}", entry.format_human_readable())?;
            }
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, entries)?;
            writeln!(writer)?;
        }
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut *writer);
            for entry in entries {
                csv_writer
                    .serialize(CsvRow::from(entry))
                    .map_err(|e| StepformError::Io(format!("Failed to write CSV row: {}", e)))?;
            }
            csv_writer
                .flush()
                .map_err(|e| StepformError::Io(format!("Failed to flush CSV output: {}", e)))?;
        }
    }
    Ok(())
}
