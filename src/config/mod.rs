//! Configuration module for stepform
//!
//! - Platform path resolution
//! - User settings persistence
//! - The wizard's i18n string bundle

pub mod paths;
pub mod settings;
pub mod strings;

pub use paths::StepformPaths;
pub use settings::Settings;
pub use strings::WizardStrings;
