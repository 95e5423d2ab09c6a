//! Step form controller
//!
//! Owns the [`WizardState`] and runs the validation gates in front of every
//! navigation and submit request. Every operation is total: a blocked
//! transition is a no-op apart from raising the attempted-to-submit flag,
//! which makes the step's error visible.

use serde::{Deserialize, Serialize};

use super::pages::PageDefinition;
use super::state::{StateChange, WizardState};

/// Error shown under a required field left empty
pub const BLANK_FIELD_ERROR: &str = "This field cannot be left blank.";

pub const SUBMIT_RESULT: &str = "Submit action was called.";

pub const CANCEL_RESULT: &str = "Cancel action was called.";

/// Result text of an accepted navigation
pub fn navigate_result(from: usize, to: usize) -> String {
    format!(
        "Navigate action was called. Starting index: {}. Ending index: {}",
        from, to
    )
}

/// Why the widget asked to navigate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationReason {
    /// Primary button on a non-last step
    Next,
    /// Previous button
    Previous,
    /// Link in the step navigation
    Step,
}

/// A request raised by the wizard widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardRequest {
    Navigate {
        requested_step_index: usize,
        reason: NavigationReason,
    },
    Submit,
    Cancel,
}

/// Mediates wizard requests against the form state
#[derive(Debug, Clone)]
pub struct StepFormController {
    state: WizardState,
    /// Whether each step's value must be non-empty to leave it
    required: Vec<bool>,
}

impl StepFormController {
    /// Create a controller for steps with the given required flags
    pub fn new(required: Vec<bool>) -> Self {
        Self {
            state: WizardState::new(required.len()),
            required,
        }
    }

    /// Create a controller for a page's steps
    pub fn for_page(page: &PageDefinition) -> Self {
        Self::new(page.required_flags())
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step_count(&self) -> usize {
        self.required.len()
    }

    pub fn active_step_index(&self) -> usize {
        self.state.active_step_index
    }

    pub fn result_text(&self) -> &str {
        &self.state.result_text
    }

    /// Error for a step, derived from the attempted flag and its value
    pub fn error_text(&self, step: usize) -> Option<&'static str> {
        let required = self.required.get(step).copied().unwrap_or(false);
        (self.state.attempted_to_submit && required && self.state.value(step).is_empty())
            .then_some(BLANK_FIELD_ERROR)
    }

    /// Route a widget request to its handler
    pub fn dispatch(&mut self, request: WizardRequest) -> StateChange {
        match request {
            WizardRequest::Navigate {
                requested_step_index,
                ..
            } => self.on_navigate(requested_step_index),
            WizardRequest::Submit => self.on_submit(),
            WizardRequest::Cancel => self.on_cancel(),
        }
    }

    /// Move to another step if the active step's value passes validation
    ///
    /// Indices past the last step are clamped to the last step.
    pub fn on_navigate(&mut self, requested_step_index: usize) -> StateChange {
        let mut next = self.state.clone();
        next.attempted_to_submit = true;

        let from = self.state.active_step_index;
        let passed = self.passes_gate(from);
        if passed {
            let to = requested_step_index.min(self.step_count().saturating_sub(1));
            next.attempted_to_submit = false;
            next.active_step_index = to;
            next.result_text = navigate_result(from, to);
        }

        self.commit(next, !passed)
    }

    /// Accept the form if the final step's value passes validation
    pub fn on_submit(&mut self) -> StateChange {
        let mut next = self.state.clone();
        next.attempted_to_submit = true;

        let passed = self.passes_gate(self.step_count().saturating_sub(1));
        if passed {
            next.result_text = SUBMIT_RESULT.to_string();
        }

        self.commit(next, !passed)
    }

    pub fn on_cancel(&mut self) -> StateChange {
        let mut next = self.state.clone();
        next.result_text = CANCEL_RESULT.to_string();
        self.commit(next, false)
    }

    /// Overwrite a step's value; unknown steps are ignored
    pub fn set_value(&mut self, step: usize, text: impl Into<String>) -> StateChange {
        let mut next = self.state.clone();
        if let Some(value) = next.values.get_mut(step) {
            *value = text.into();
        }
        self.commit(next, false)
    }

    fn passes_gate(&self, step: usize) -> bool {
        let required = self.required.get(step).copied().unwrap_or(false);
        !required || !self.state.value(step).is_empty()
    }

    fn commit(&mut self, next: WizardState, blocked: bool) -> StateChange {
        let mut change = self.state.diff(&next);
        change.blocked = blocked;
        self.state = next;
        change
    }
}
