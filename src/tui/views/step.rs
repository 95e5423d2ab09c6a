//! Active step view
//!
//! Header, the step container (form field or plain content text), and the
//! action row.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::widgets::{Button, InputBox};
use crate::wizard::{FieldDefinition, FocusTarget, StepContent};

/// Render the active step's title
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(step) = app.active_step() else {
        return;
    };

    let mut style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    if app.is_focused(FocusTarget::Header) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let progress = app
        .strings
        .collapsed_navigation(app.active_step_index(), app.page.step_count());

    let lines = vec![
        Line::from(Span::styled(progress, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(step.title.to_string(), style)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the container with the step's content
pub fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let Some(step) = app.active_step() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", step.container_header))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &step.content {
        StepContent::Field(field) => render_form_field(frame, app, field, inner),
        StepContent::Text(text) => {
            let paragraph = Paragraph::new(text.to_string())
                .wrap(Wrap { trim: false })
                .scroll((app.scroll_offset, 0));
            frame.render_widget(paragraph, inner);
        }
    }
}

fn render_form_field(frame: &mut Frame, app: &App, field: &FieldDefinition, area: Rect) {
    let step = app.active_step_index();
    let error = app.controller.error_text(step);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Description
            Constraint::Length(3), // Input
            Constraint::Length(1), // Error
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            field.label,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            field.description,
            Style::default().fg(Color::DarkGray),
        )),
        chunks[1],
    );

    if let Some(input) = app.inputs.get(step) {
        frame.render_widget(
            InputBox::new(input)
                .focused(app.is_focused(FocusTarget::Input))
                .invalid(error.is_some()),
            chunks[2],
        );
    }

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("⚠ {}", message),
                Style::default().fg(Color::Red),
            )),
            chunks[3],
        );
    }
}

/// Render Cancel, Previous and the primary button, right aligned
pub fn render_actions(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }

    let mut buttons = vec![Button::new(&app.strings.cancel_button)
        .focused(app.is_focused(FocusTarget::CancelButton))];
    if app.active_step_index() > 0 {
        buttons.push(
            Button::new(&app.strings.previous_button)
                .focused(app.is_focused(FocusTarget::PreviousButton)),
        );
    }
    buttons.push(
        Button::new(app.primary_label())
            .primary(true)
            .focused(app.is_focused(FocusTarget::PrimaryButton)),
    );

    let total = buttons
        .iter()
        .fold(0u16, |acc, b| acc.saturating_add(b.width()).saturating_add(1));
    let mut x = area.right().saturating_sub(total).max(area.x);
    for button in buttons {
        let width = button.width().min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        frame.render_widget(button, Rect::new(x, area.y, width, 1));
        x = x.saturating_add(width).saturating_add(1);
    }
}
