//! Demo page definitions and the route registry
//!
//! A page is a static list of steps. A step either holds one validated text
//! field or a block of plain content text.

use std::fmt;
use std::str::FromStr;

use crate::error::StepformError;

/// A text field rendered inside a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Test id of the input element
    pub input_test_id: &'static str,
    /// Test id of the surrounding form field (label, description, error)
    pub form_field_test_id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Whether an empty value blocks leaving the step
    pub required: bool,
}

/// What a step shows below its header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepContent {
    Field(FieldDefinition),
    Text(&'static str),
}

/// One page of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    /// Title shown in the navigation and as the step header
    pub title: &'static str,
    /// Heading of the container that wraps the content
    pub container_header: &'static str,
    pub content: StepContent,
    pub is_optional: bool,
}

impl StepDefinition {
    /// The step's field, if it has one
    pub fn field(&self) -> Option<&FieldDefinition> {
        match &self.content {
            StepContent::Field(field) => Some(field),
            StepContent::Text(_) => None,
        }
    }

    /// Whether leaving this step requires a non-empty value
    pub fn is_required(&self) -> bool {
        self.field().map(|f| f.required).unwrap_or(false)
    }
}

/// Routes under which demo pages are served
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRoute {
    /// Two-step form with hand-written validation
    NativeFormSubmit,
    /// Plain content steps without fields
    Simple,
}

impl PageRoute {
    pub const ALL: [PageRoute; 2] = [PageRoute::NativeFormSubmit, PageRoute::Simple];

    pub fn path(self) -> &'static str {
        match self {
            PageRoute::NativeFormSubmit => "/wizard/native-form-submit",
            PageRoute::Simple => "/wizard/simple",
        }
    }

    /// Build the page served under this route
    pub fn page(self) -> PageDefinition {
        match self {
            PageRoute::NativeFormSubmit => native_form_submit_page(),
            PageRoute::Simple => simple_page(),
        }
    }
}

impl fmt::Display for PageRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for PageRoute {
    type Err = StepformError;

    /// Accepts bare paths as well as hash URLs such as
    /// `/#/light/wizard/simple?visualRefresh=false`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let without_query = trimmed.split('?').next().unwrap_or_default();
        let mut path = without_query.trim_start_matches('/').trim_start_matches('#');
        for theme in ["/light", "/dark"] {
            if let Some(rest) = path.strip_prefix(theme) {
                path = rest;
            }
        }
        let path = format!("/{}", path.trim_start_matches('/').trim_end_matches('/'));

        PageRoute::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| StepformError::Route(s.to_string()))
    }
}

/// A complete demo page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDefinition {
    pub route: PageRoute,
    pub steps: Vec<StepDefinition>,
}

impl PageDefinition {
    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_last_step(&self, index: usize) -> bool {
        index + 1 >= self.steps.len()
    }

    /// Required flag per step, in step order
    pub fn required_flags(&self) -> Vec<bool> {
        self.steps.iter().map(StepDefinition::is_required).collect()
    }
}

fn native_form_submit_page() -> PageDefinition {
    PageDefinition {
        route: PageRoute::NativeFormSubmit,
        steps: vec![
            StepDefinition {
                title: "Step 1",
                container_header: "A container for step 1",
                content: StepContent::Field(FieldDefinition {
                    input_test_id: "first-name-input",
                    form_field_test_id: "first-name-form-field",
                    label: "First name (required)",
                    description: "Enter your first name.",
                    required: true,
                }),
                is_optional: false,
            },
            StepDefinition {
                title: "Step 2",
                container_header: "A container for step 2",
                content: StepContent::Field(FieldDefinition {
                    input_test_id: "last-name-input",
                    form_field_test_id: "last-name-form-field",
                    label: "Last name",
                    description: "Enter your last name.",
                    required: true,
                }),
                is_optional: false,
            },
        ],
    }
}

fn simple_page() -> PageDefinition {
    PageDefinition {
        route: PageRoute::Simple,
        steps: vec![
            StepDefinition {
                title: "Step 1",
                container_header: "Container 1",
                content: StepContent::Text("Content 1"),
                is_optional: false,
            },
            StepDefinition {
                title: "Step 2",
                container_header: "Container 2",
                content: StepContent::Text("Content 2"),
                is_optional: false,
            },
            StepDefinition {
                title: "Step 3",
                container_header: "Container 3",
                content: StepContent::Text("Content 3"),
                is_optional: true,
            },
        ],
    }
}
