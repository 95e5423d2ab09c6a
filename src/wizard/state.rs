//! Wizard state value object
//!
//! `WizardState` is never edited in place by the view layer. The controller
//! derives the next state from the current one and reports the difference as
//! a [`StateChange`], which drives focus and scroll updates.

use serde::Serialize;

/// Snapshot of everything the wizard page shows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WizardState {
    pub active_step_index: usize,
    /// Gates whether validation errors are rendered
    pub attempted_to_submit: bool,
    pub result_text: String,
    /// Field value per step; fieldless steps keep an empty string
    pub values: Vec<String>,
}

impl WizardState {
    /// Initial state: index 0, empty values, nothing attempted
    pub fn new(step_count: usize) -> Self {
        Self {
            active_step_index: 0,
            attempted_to_submit: false,
            result_text: String::new(),
            values: vec![String::new(); step_count],
        }
    }

    /// Value stored for a step, empty for unknown steps
    pub fn value(&self, step: usize) -> &str {
        self.values.get(step).map(String::as_str).unwrap_or("")
    }

    /// Compare with a later state
    pub fn diff(&self, next: &WizardState) -> StateChange {
        StateChange {
            step: (self.active_step_index != next.active_step_index)
                .then_some((self.active_step_index, next.active_step_index)),
            attempted_to_submit: (self.attempted_to_submit != next.attempted_to_submit)
                .then_some(next.attempted_to_submit),
            result_text: self.result_text != next.result_text,
            values: self
                .values
                .iter()
                .zip(next.values.iter())
                .enumerate()
                .filter(|(_, (before, after))| before != after)
                .map(|(i, _)| i)
                .collect(),
            blocked: false,
        }
    }
}

/// What changed between two consecutive states
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateChange {
    /// `(from, to)` when the active step moved
    pub step: Option<(usize, usize)>,
    /// New flag value when it flipped
    pub attempted_to_submit: Option<bool>,
    pub result_text: bool,
    /// Steps whose value changed
    pub values: Vec<usize>,
    /// A validation gate rejected the request
    pub blocked: bool,
}

impl StateChange {
    pub fn is_empty(&self) -> bool {
        self.step.is_none()
            && self.attempted_to_submit.is_none()
            && !self.result_text
            && self.values.is_empty()
    }

    /// Index the wizard moved to, if it moved
    pub fn navigated_to(&self) -> Option<usize> {
        self.step.map(|(_, to)| to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = WizardState::new(2);
        assert_eq!(state.active_step_index, 0);
        assert!(!state.attempted_to_submit);
        assert!(state.result_text.is_empty());
        assert_eq!(state.values, vec![String::new(), String::new()]);
        assert_eq!(state.value(5), "");
    }

    #[test]
    fn test_diff_of_identical_states_is_empty() {
        let state = WizardState::new(2);
        assert!(state.diff(&state.clone()).is_empty());
    }

    #[test]
    fn test_diff_reports_each_variable() {
        let before = WizardState::new(2);
        let mut after = before.clone();
        after.active_step_index = 1;
        after.attempted_to_submit = true;
        after.result_text = "done".to_string();
        after.values[1] = "x".to_string();

        let change = before.diff(&after);
        assert_eq!(change.step, Some((0, 1)));
        assert_eq!(change.navigated_to(), Some(1));
        assert_eq!(change.attempted_to_submit, Some(true));
        assert!(change.result_text);
        assert_eq!(change.values, vec![1]);
    }
}
