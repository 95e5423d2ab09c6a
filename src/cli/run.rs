//! `stepform run`: drive a page headlessly and print what it shows

use std::io::Write;

use clap::Args;
use crate::actions::ActionLogger;
use crate::config::{Settings, StepformPaths, WizardStrings};
use crate::error::StepformResult;
use crate::harness::{PageDriver, Selector};

/// Arguments of `stepform run`
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Page route (defaults to the configured page)
    #[arg(short, long)]
    pub page: Option<String>,

    /// Comma separated steps: key names, `Shift+Tab`, `click:SELECTOR`, `type:TEXT`
    /// (write `\,` for a comma inside typed text)
    #[arg(short, long)]
    pub keys: Option<String>,

    /// Text typed into the first step's input before the keys run
    #[arg(short = 't', long = "type")]
    pub text: Option<String>,
}

/// Open the page, run the steps and print the resulting page state
pub fn handle_run_command<W: Write>(
    paths: &StepformPaths,
    settings: &Settings,
    strings: &WizardStrings,
    args: &RunArgs,
    out: &mut W,
) -> StepformResult<()> {
    let route = args.page.as_deref().unwrap_or(&settings.default_page);
    let mut driver = PageDriver::open(route)?.with_strings(strings.clone());
    if settings.action_log_enabled {
        driver = driver.with_action_log(ActionLogger::new(paths.action_log()));
    }

    if let Some(text) = &args.text {
        driver.click(&Selector::Input)?;
        driver.type_text(text)?;
    }
    if let Some(script) = &args.keys {
        driver.run_script(script)?;
    }

    write_summary(&driver, out)
}

fn write_summary<W: Write>(driver: &PageDriver, out: &mut W) -> StepformResult<()> {
    let app = driver.app();

    writeln!(out, "Page:    {}", app.page.route.path())?;
    writeln!(
        out,
        "Step:    {} ({})",
        app.strings
            .collapsed_navigation(app.active_step_index(), app.page.step_count()),
        app.active_step().map(|s| s.title).unwrap_or_default()
    )?;
    writeln!(out, "Result:  {}", app.controller.result_text())?;
    writeln!(
        out,
        "Focused: {}",
        driver
            .focused_element_text()
            .unwrap_or_else(|| "(none)".to_string())
    )?;

    for (index, step) in app.page.steps.iter().enumerate() {
        if let (Some(field), Some(error)) = (step.field(), app.controller.error_text(index)) {
            writeln!(out, "Error:   {}: {}", field.form_field_test_id, error)?;
        }
    }
    writeln!(out, "Session: {}", app.session_id())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(args: RunArgs) -> (String, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StepformPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut out = Vec::new();
        handle_run_command(
            &paths,
            &Settings::default(),
            &WizardStrings::default(),
            &args,
            &mut out,
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), temp_dir)
    }

    #[test]
    fn test_blank_enter_reports_error() {
        let (out, _dir) = run(RunArgs {
            keys: Some("click:input,Enter".to_string()),
            ..Default::default()
        });
        assert!(out.contains("Page:    /wizard/native-form-submit"));
        assert!(out.contains("Error:   first-name-form-field: This field cannot be left blank."));
        assert!(out.contains("Step:    Step 1 of 2 (Step 1)"));
    }

    #[test]
    fn test_type_then_enter_navigates_and_logs() {
        let (out, dir) = run(RunArgs {
            text: Some("MyFirstName".to_string()),
            keys: Some("Enter".to_string()),
            ..Default::default()
        });
        assert!(out.contains("Navigate action was called. Starting index: 0. Ending index: 1"));
        assert!(out.contains("Focused: Step 2"));

        let paths = StepformPaths::with_base_dir(dir.path().to_path_buf());
        let entries = ActionLogger::new(paths.action_log()).read_all().unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_simple_page() {
        let (out, _dir) = run(RunArgs {
            page: Some("/#/light/wizard/simple?visualRefresh=false".to_string()),
            keys: Some("click:#focus-reset,Tab,Tab,Space".to_string()),
            ..Default::default()
        });
        assert!(out.contains("Step:    Step 2 of 3 (Step 2)"));
        assert!(!out.contains("Error:"));
    }
}
