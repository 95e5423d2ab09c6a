//! TUI Views module
//!
//! Renders the wizard page: result text, step navigation, the active step
//! and its actions, and the status bar.

pub mod navigation;
pub mod result;
pub mod status_bar;
pub mod step;

use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::WizardLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = WizardLayout::new(frame.area());

    result::render(frame, app, layout.result);
    navigation::render(frame, app, layout.navigation);
    step::render_header(frame, app, layout.header);
    step::render_content(frame, app, layout.content);
    step::render_actions(frame, app, layout.actions);
    status_bar::render(frame, app, layout.status_bar);

    if app.show_help {
        dialogs::help::render(frame);
    }
}
