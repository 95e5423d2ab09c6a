//! Button widget
//!
//! A bracketed label. Primary buttons are bold; the focused button is drawn
//! reversed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
    primary: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
            primary: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Columns needed to draw the button
    pub fn width(&self) -> u16 {
        u16::try_from(self.label.chars().count())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let mut style = if self.primary {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if self.focused {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let text = format!("[ {} ]", self.label);
        buf.set_stringn(area.x, area.y, text, area.width as usize, style);
    }
}
