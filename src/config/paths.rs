//! Path management for stepform
//!
//! ## Path Resolution Order
//!
//! 1. `STEPFORM_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/stepform` on Linux, `%APPDATA%\stepform` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::StepformError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "STEPFORM_DATA_DIR";

/// Manages all paths used by stepform
#[derive(Debug, Clone)]
pub struct StepformPaths {
    base_dir: PathBuf,
}

impl StepformPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, StepformError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the i18n strings bundle
    pub fn strings_file(&self) -> PathBuf {
        self.base_dir.join("strings.yaml")
    }

    /// Path to the JSONL action log
    pub fn action_log(&self) -> PathBuf {
        self.base_dir.join("actions.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), StepformError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StepformError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if `stepform init` has been run here
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, StepformError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| StepformError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("stepform"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StepformPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.strings_file(), temp_dir.path().join("strings.yaml"));
        assert_eq!(paths.action_log(), temp_dir.path().join("actions.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = StepformPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StepformPaths::with_base_dir(temp_dir.path().join("nested").join("stepform"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
