//! Action log entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wizard::{NavigationReason, StateChange, WizardRequest};

/// Kind of wizard request that was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Navigate,
    Submit,
    Cancel,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Navigate => write!(f, "NAVIGATE"),
            ActionKind::Submit => write!(f, "SUBMIT"),
            ActionKind::Cancel => write!(f, "CANCEL"),
        }
    }
}

/// Whether the request went through its validation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Applied,
    Blocked,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Applied => write!(f, "applied"),
            Outcome::Blocked => write!(f, "blocked"),
        }
    }
}

/// One handled wizard request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEntry {
    /// When the request was handled (UTC)
    pub timestamp: DateTime<Utc>,

    /// Identifies one wizard session (one opened page)
    pub session_id: Uuid,

    /// Route of the page the request came from
    pub page: String,

    pub action: ActionKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<NavigationReason>,

    /// Active step when the request arrived
    pub starting_index: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_index: Option<usize>,

    pub outcome: Outcome,

    /// Result text after the request
    pub result_text: String,
}

impl ActionEntry {
    /// Describe a request and the state change it produced
    pub fn record(
        session_id: Uuid,
        page: impl Into<String>,
        request: WizardRequest,
        starting_index: usize,
        change: &StateChange,
        result_text: impl Into<String>,
    ) -> Self {
        let (action, reason, requested_index) = match request {
            WizardRequest::Navigate {
                requested_step_index,
                reason,
            } => (ActionKind::Navigate, Some(reason), Some(requested_step_index)),
            WizardRequest::Submit => (ActionKind::Submit, None, None),
            WizardRequest::Cancel => (ActionKind::Cancel, None, None),
        };

        Self {
            timestamp: Utc::now(),
            session_id,
            page: page.into(),
            action,
            reason,
            starting_index,
            requested_index,
            outcome: if change.blocked { Outcome::Blocked } else { Outcome::Applied },
            result_text: result_text.into(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} step {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action,
            self.page,
            self.starting_index
        );

        if let Some(requested) = self.requested_index {
            output.push_str(&format!(" -> {}", requested));
        }

        output.push_str(&format!(" ({})", self.outcome));
        output
    }
}
