//! Step navigation list
//!
//! One entry per step: the step number label above the title. Earlier steps
//! are links, the active step is highlighted, later steps are dimmed.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::wizard::FocusTarget;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.active_step_index();
    let mut lines = Vec::new();

    for (index, step) in app.page.steps.iter().enumerate() {
        let title_style = if index == active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else if index < active {
            let style = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED);
            if app.is_focused(FocusTarget::NavLink(index)) {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            }
        } else {
            Style::default().fg(Color::DarkGray)
        };

        lines.push(Line::from(Span::styled(
            app.strings.step_number(index),
            Style::default().fg(Color::DarkGray),
        )));

        let mut title = vec![Span::styled(step.title.to_string(), title_style)];
        if step.is_optional {
            title.push(Span::styled(
                format!(" - {}", app.strings.optional),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        }
        lines.push(Line::from(title));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title(format!(" {} ", app.strings.navigation_label))
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
