//! Status bar view
//!
//! Shows step progress, the latest status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(
            " {} ",
            app.strings
                .collapsed_navigation(app.active_step_index(), app.page.step_count())
        ),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    spans.push(Span::raw("│ "));
    spans.push(Span::styled(
        app.page.route.path(),
        Style::default().fg(Color::White),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " Tab:Focus  Enter:Activate  F1:Help  Ctrl+C:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
