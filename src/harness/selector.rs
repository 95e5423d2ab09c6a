//! Element selectors
//!
//! Two CSS-like forms are understood: `[data-testid="..."]` and `#id`. The
//! remaining variants address structural parts of the wizard that carry no
//! stable id of their own.

use std::fmt;
use std::str::FromStr;

use crate::error::StepformError;

/// A way of finding one element on the rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `[data-testid="value"]`
    TestId(String),
    /// `#value`
    Id(String),
    /// The input of the active step
    Input,
    /// The error text inside the form field with this test id
    FormFieldError(String),
    /// Next, or submit on the last step
    PrimaryButton,
}

impl Selector {
    pub fn test_id(value: impl Into<String>) -> Self {
        Self::TestId(value.into())
    }

    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    pub fn form_field_error(form_field_test_id: impl Into<String>) -> Self {
        Self::FormFieldError(form_field_test_id.into())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::TestId(value) => write!(f, "[data-testid=\"{}\"]", value),
            Selector::Id(value) => write!(f, "#{}", value),
            Selector::Input => write!(f, "input"),
            Selector::FormFieldError(value) => write!(f, "[data-testid=\"{}\"]:error", value),
            Selector::PrimaryButton => write!(f, "primary-button"),
        }
    }
}

impl FromStr for Selector {
    type Err = StepformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "input" => return Ok(Selector::Input),
            "primary-button" => return Ok(Selector::PrimaryButton),
            _ => {}
        }

        if let Some(id) = s.strip_prefix('#') {
            if id.is_empty() || id.contains(char::is_whitespace) {
                return Err(StepformError::Selector(format!("invalid id selector: {}", s)));
            }
            return Ok(Selector::Id(id.to_string()));
        }

        if let Some(field) = s.strip_suffix(":error") {
            return parse_test_id(field).map(Selector::FormFieldError);
        }

        parse_test_id(s).map(Selector::TestId)
    }
}

fn parse_test_id(s: &str) -> Result<String, StepformError> {
    let invalid = || StepformError::Selector(format!("invalid selector: {}", s));

    let inner = s
        .strip_prefix("[data-testid=")
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?;

    let value = inner
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| inner.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .ok_or_else(invalid)?;

    if value.is_empty() {
        return Err(invalid());
    }
    Ok(value.to_string())
}
