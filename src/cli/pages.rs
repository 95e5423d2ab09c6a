//! `stepform pages`

use std::io::Write;

use crate::config::WizardStrings;
use crate::error::StepformResult;
use crate::wizard::{PageRoute, StepContent};

/// List every route with its steps
pub fn handle_pages_command<W: Write>(strings: &WizardStrings, out: &mut W) -> StepformResult<()> {
    for route in PageRoute::ALL {
        let page = route.page();
        writeln!(out, "{}", route.path())?;
        for (index, step) in page.steps.iter().enumerate() {
            let mut line = format!("  {}: {}", strings.step_number(index), step.title);
            if let StepContent::Field(field) = &step.content {
                line.push_str(&format!(" [{}]", field.input_test_id));
            }
            if step.is_optional {
                line.push_str(&format!(" ({})", strings.optional));
            }
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_both_pages() {
        let mut out = Vec::new();
        handle_pages_command(&WizardStrings::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("/wizard/native-form-submit"));
        assert!(text.contains("  Step 1: Step 1 [first-name-input]"));
        assert!(text.contains("/wizard/simple"));
        assert!(text.contains("  Step 3: Step 3 (optional)"));
    }
}
