//! Wizard string bundle
//!
//! Every label the wizard renders comes from here. The bundle is read from
//! `strings.yaml` when present; missing keys fall back to the English
//! defaults. Templates use `{number}` and `{total}` placeholders.

use serde::{Deserialize, Serialize};

use super::paths::StepformPaths;
use crate::error::StepformError;

/// Labels used by the wizard widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardStrings {
    /// Label above each step title in the navigation, e.g. "Step {number}"
    pub step_number_label: String,
    /// Compact progress text, e.g. "Step {number} of {total}"
    pub collapsed_steps_navigation_text: String,
    /// Title of the navigation list
    pub navigation_label: String,
    pub cancel_button: String,
    pub previous_button: String,
    pub next_button: String,
    pub submit_button: String,
    /// Marker appended to optional step titles
    pub optional: String,
}

impl Default for WizardStrings {
    fn default() -> Self {
        Self {
            step_number_label: "Step {number}".to_string(),
            collapsed_steps_navigation_text: "Step {number} of {total}".to_string(),
            navigation_label: "Steps".to_string(),
            cancel_button: "Cancel".to_string(),
            previous_button: "Previous".to_string(),
            next_button: "Next".to_string(),
            submit_button: "Create record".to_string(),
            optional: "optional".to_string(),
        }
    }
}

impl WizardStrings {
    /// Label for a zero-based step index
    pub fn step_number(&self, index: usize) -> String {
        self.step_number_label
            .replace("{number}", &(index + 1).to_string())
    }

    /// Progress text for a zero-based step index
    pub fn collapsed_navigation(&self, index: usize, total: usize) -> String {
        self.collapsed_steps_navigation_text
            .replace("{number}", &(index + 1).to_string())
            .replace("{total}", &total.to_string())
    }

    /// Load the bundle from `strings.yaml`, or the defaults if it does not exist
    pub fn load_or_default(paths: &StepformPaths) -> Result<Self, StepformError> {
        let strings_path = paths.strings_file();
        if !strings_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&strings_path)
            .map_err(|e| StepformError::Io(format!("Failed to read strings file: {}", e)))?;
        Self::from_yaml(&contents)
    }

    /// Parse a bundle from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self, StepformError> {
        serde_yaml::from_str(contents)
            .map_err(|e| StepformError::Config(format!("Failed to parse strings file: {}", e)))
    }

    /// Write the bundle to `strings.yaml`
    pub fn save(&self, paths: &StepformPaths) -> Result<(), StepformError> {
        paths.ensure_directories()?;
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(paths.strings_file(), contents)
            .map_err(|e| StepformError::Io(format!("Failed to write strings file: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_templates() {
        let strings = WizardStrings::default();
        assert_eq!(strings.step_number(0), "Step 1");
        assert_eq!(strings.collapsed_navigation(1, 3), "Step 2 of 3");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let strings = WizardStrings::from_yaml("submit_button: Finish\nstep_number_label: \"Etape {number}\"\n")
            .unwrap();
        assert_eq!(strings.submit_button, "Finish");
        assert_eq!(strings.step_number(2), "Etape 3");
        assert_eq!(strings.next_button, "Next");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StepformPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(WizardStrings::load_or_default(&paths).unwrap(), WizardStrings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StepformPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut strings = WizardStrings::default();
        strings.cancel_button = "Abort".to_string();
        strings.save(&paths).unwrap();

        let loaded = WizardStrings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.cancel_button, "Abort");
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let err = WizardStrings::from_yaml("submit_button: [unclosed").unwrap_err();
        assert!(matches!(err, StepformError::Config(_)));
    }
}
