//! Append-only action log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{StepformError, StepformResult};

use super::entry::ActionEntry;

/// Writes action entries to a JSONL file
#[derive(Debug, Clone)]
pub struct ActionLogger {
    log_path: PathBuf,
}

impl ActionLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry to the log
    pub fn log(&self, entry: &ActionEntry) -> StepformResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StepformError::Io(format!("Failed to create log directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| StepformError::Io(format!("Failed to open action log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| StepformError::Json(format!("Failed to serialize action entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| StepformError::Io(format!("Failed to write action entry: {}", e)))?;

        file.flush()
            .map_err(|e| StepformError::Io(format!("Failed to flush action log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> StepformResult<Vec<ActionEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| StepformError::Io(format!("Failed to open action log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                StepformError::Io(format!("Failed to read action log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: ActionEntry = serde_json::from_str(&line).map_err(|e| {
                StepformError::Json(format!(
                    "Failed to parse action entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent `count` entries
    pub fn read_recent(&self, count: usize) -> StepformResult<Vec<ActionEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::entry::{ActionKind, Outcome};
    use crate::wizard::{StateChange, WizardRequest};
    use tempfile::TempDir;
    use uuid::Uuid;

    fn create_test_logger() -> (ActionLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = ActionLogger::new(temp_dir.path().join("actions.log"));
        (logger, temp_dir)
    }

    fn cancel_entry(session: Uuid) -> ActionEntry {
        ActionEntry::record(
            session,
            "/wizard/simple",
            WizardRequest::Cancel,
            0,
            &StateChange::default(),
            "Cancel action was called.",
        )
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let session = Uuid::new_v4();
        logger.log(&cancel_entry(session)).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, ActionKind::Cancel);
        assert_eq!(entries[0].outcome, Outcome::Applied);
        assert_eq!(entries[0].session_id, session);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for i in 0..5 {
            let mut entry = cancel_entry(Uuid::new_v4());
            entry.starting_index = i;
            logger.log(&entry).unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].starting_index, 3);
        assert_eq!(recent[1].starting_index, 4);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_creates_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let logger = ActionLogger::new(temp_dir.path().join("nested").join("actions.log"));
        logger.log(&cancel_entry(Uuid::new_v4())).unwrap();
        assert!(logger.exists());
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let (logger, _temp) = create_test_logger();
        logger.log(&cancel_entry(Uuid::new_v4())).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .and_then(|mut f| writeln!(f, "not json"))
            .unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
