//! User settings for stepform
//!
//! Manages the default page, the event tick rate and whether wizard actions
//! are recorded in the action log.

use serde::{Deserialize, Serialize};

use super::paths::StepformPaths;
use crate::error::StepformError;

/// User settings for stepform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Route opened by `stepform tui` when no `--page` is given
    #[serde(default = "default_page")]
    pub default_page: String,

    /// Event loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Whether wizard actions are appended to the action log
    #[serde(default = "default_action_log")]
    pub action_log_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_page() -> String {
    "/wizard/native-form-submit".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_action_log() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_page: default_page(),
            tick_rate_ms: default_tick_rate_ms(),
            action_log_enabled: default_action_log(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &StepformPaths) -> Result<Self, StepformError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                StepformError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StepformError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StepformPaths) -> Result<(), StepformError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            StepformError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            StepformError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
