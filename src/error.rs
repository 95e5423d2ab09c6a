//! Custom error types for stepform
//!
//! Infrastructure failures only. An empty required field is not an error
//! value: it shows up as derived display state on the step.

use thiserror::Error;

/// The main error type for stepform operations
#[derive(Error, Debug)]
pub enum StepformError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A page route that no page is registered under
    #[error("Unknown route: {0}")]
    Route(String),

    /// A selector that is malformed or matches nothing on the page
    #[error("Selector error: {0}")]
    Selector(String),

    /// Key names the page driver does not understand
    #[error("Unknown key: {0}")]
    Key(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl StepformError {
    /// Create a "no element matches" error
    pub fn no_match(selector: impl std::fmt::Display) -> Self {
        Self::Selector(format!("no element matches {}", selector))
    }

    /// Check if this is a selector error
    pub fn is_selector(&self) -> bool {
        matches!(self, Self::Selector(_))
    }
}

impl From<std::io::Error> for StepformError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StepformError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for StepformError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for stepform operations
pub type StepformResult<T> = Result<T, StepformError>;
