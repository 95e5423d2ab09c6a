//! Result-text region
//!
//! Shows the message of the last accepted wizard action, and the focus-reset
//! anchor used to restart keyboard traversal.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::wizard::FocusTarget;

/// Text of the focus-reset anchor
pub const FOCUS_RESET_LABEL: &str = "Reset focus";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let anchor_style = if app.is_focused(FocusTarget::FocusReset) {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(format!(" {} ", FOCUS_RESET_LABEL), anchor_style));

    let line = Line::from(Span::styled(
        app.controller.result_text().to_string(),
        Style::default().fg(Color::Green),
    ));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
