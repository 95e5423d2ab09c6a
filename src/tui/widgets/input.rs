//! Text input widget
//!
//! A single-line input field with a character-based cursor. The field is
//! drawn inside a bordered box whose color reflects focus and error state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Editable text with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input holding `content` with the cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

/// Renders a [`TextInput`] in a box
pub struct InputBox<'a> {
    input: &'a TextInput,
    focused: bool,
    invalid: bool,
}

impl<'a> InputBox<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            focused: false,
            invalid: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Draw the border in the error color
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.invalid {
            Color::Red
        } else if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = Vec::new();
        let chars: Vec<char> = self.input.value().chars().collect();
        if self.focused {
            let cursor = self.input.cursor().min(chars.len());
            let before: String = chars[..cursor].iter().collect();
            let at = chars.get(cursor).copied().unwrap_or(' ');
            let after: String = chars.iter().skip(cursor + 1).collect();
            spans.push(Span::raw(before));
            spans.push(Span::styled(
                at.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(self.input.value().to_string()));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
