//! Headless page driver
//!
//! Opens a wizard page and drives it the way a user at the keyboard would.
//! Keys go through the same handler as the interactive TUI, so focus
//! traversal and activation behave identically.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use crate::actions::ActionLogger;
use crate::config::WizardStrings;
use crate::error::{StepformError, StepformResult};
use crate::tui::{handler::handle_key_event, views, App};
use crate::wizard::{FocusTarget, PageRoute};

use super::screen::{ElementKind, Screen, FOCUS_RESET_ID};
use super::selector::Selector;

/// Drives one open wizard page
pub struct PageDriver {
    app: App,
}

impl PageDriver {
    /// Open the page at `url`, e.g. `/#/light/wizard/simple?visualRefresh=false`
    pub fn open(url: &str) -> StepformResult<Self> {
        let route: PageRoute = url.parse()?;
        Ok(Self {
            app: App::new(route.page()),
        })
    }

    pub fn with_strings(mut self, strings: WizardStrings) -> Self {
        self.app = self.app.with_strings(strings);
        self
    }

    pub fn with_action_log(mut self, logger: ActionLogger) -> Self {
        self.app = self.app.with_action_log(logger);
        self
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn screen(&self) -> Screen {
        Screen::capture(&self.app)
    }

    /// Focus the element and activate it if it is a button or link
    pub fn click(&mut self, selector: &Selector) -> StepformResult<()> {
        let element = self
            .screen()
            .find(selector)
            .cloned()
            .ok_or_else(|| StepformError::no_match(selector))?;

        if let Some(target) = element.focus {
            self.app.set_focus(target);
            if target.is_activatable() {
                self.app.activate(target);
            }
        }
        Ok(())
    }

    pub fn click_primary_button(&mut self) -> StepformResult<()> {
        self.click(&Selector::PrimaryButton)
    }

    /// Move focus to the anchor above the wizard
    pub fn reset_focus(&mut self) -> StepformResult<()> {
        self.click(&Selector::id(FOCUS_RESET_ID))
    }

    /// Press keys in order. A `Shift` entry modifies the key after it.
    pub fn keys(&mut self, keys: &[&str]) -> StepformResult<()> {
        let mut shift = false;
        for name in keys {
            if *name == "Shift" {
                shift = true;
                continue;
            }
            let event = key_event(name, shift)?;
            shift = false;
            handle_key_event(&mut self.app, event)
                .map_err(|e| StepformError::Tui(e.to_string()))?;
        }
        Ok(())
    }

    /// Type text one character at a time into the focused element
    pub fn type_text(&mut self, text: &str) -> StepformResult<()> {
        for c in text.chars() {
            handle_key_event(&mut self.app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .map_err(|e| StepformError::Tui(e.to_string()))?;
        }
        Ok(())
    }

    /// Text of the first element matching `selector`
    pub fn get_text(&self, selector: &Selector) -> StepformResult<String> {
        self.screen()
            .find(selector)
            .map(|element| element.text.clone())
            .ok_or_else(|| StepformError::no_match(selector))
    }

    pub fn is_displayed(&self, selector: &Selector) -> bool {
        self.screen().find(selector).is_some()
    }

    /// Whether the element is inside the visible part of its scroll area
    ///
    /// Only the step content scrolls; everything else displayed is always in
    /// the viewport.
    pub fn is_displayed_in_viewport(&self, selector: &Selector) -> bool {
        let screen = self.screen();
        let Some(element) = screen.find(selector) else {
            return false;
        };
        if element.kind != ElementKind::ContentText {
            return true;
        }
        usize::from(self.app.scroll_offset) < self.app.content_line_count()
    }

    /// Scroll the step content down by `lines`
    pub fn scroll_content(&mut self, lines: u16) {
        for _ in 0..lines {
            self.app.scroll_down();
        }
    }

    /// Text of the element holding focus, if any
    pub fn focused_element_text(&self) -> Option<String> {
        let target = self.app.focus?;
        self.screen().by_focus(target).map(|e| e.text.clone())
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.app.focus
    }

    /// Draw the page to an in-memory terminal and return its rows
    pub fn render(&self, width: u16, height: u16) -> StepformResult<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).map_err(|e| StepformError::Tui(e.to_string()))?;
        terminal
            .draw(|frame| views::render(frame, &self.app))
            .map_err(|e| StepformError::Tui(e.to_string()))?;

        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width.max(1));
        let rows: Vec<String> = buffer
            .content()
            .chunks(width)
            .map(|row| {
                let line: String = row.iter().map(|cell| cell.symbol()).collect();
                line.trim_end().to_string()
            })
            .collect();
        Ok(rows.join("\n"))
    }

    /// Run a comma separated script of steps
    ///
    /// Each step is `click:SELECTOR`, `type:TEXT`, `Shift+KEY`, or a key name.
    /// Text after `type:` is typed verbatim, spaces included; write `\,` for
    /// a literal comma.
    pub fn run_script(&mut self, script: &str) -> StepformResult<()> {
        for raw in split_script(script) {
            if let Some(text) = raw.trim_start().strip_prefix("type:") {
                self.type_text(text)?;
                continue;
            }

            let step = raw.trim();
            if step.is_empty() {
                continue;
            }
            if let Some(selector) = step.strip_prefix("click:") {
                self.click(&selector.parse()?)?;
            } else if let Some(key) = step.strip_prefix("Shift+") {
                self.keys(&["Shift", key])?;
            } else {
                self.keys(&[step])?;
            }
        }
        Ok(())
    }
}

/// Split on commas that are not escaped with a backslash
fn split_script(script: &str) -> Vec<String> {
    let mut steps = Vec::new();
    let mut current = String::new();
    let mut chars = script.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&',') => {
                current.push(',');
                chars.next();
            }
            ',' => steps.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    steps.push(current);
    steps
}

fn key_event(name: &str, shift: bool) -> StepformResult<KeyEvent> {
    let code = match name {
        "Enter" => KeyCode::Enter,
        "Space" => KeyCode::Char(' '),
        "Tab" if shift => KeyCode::BackTab,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Delete" => KeyCode::Delete,
        "Escape" | "Esc" => KeyCode::Esc,
        "ArrowLeft" => KeyCode::Left,
        "ArrowRight" => KeyCode::Right,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "F1" => KeyCode::F(1),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(StepformError::Key(other.to_string())),
            }
        }
    };

    let modifiers = if shift {
        KeyModifiers::SHIFT
    } else {
        KeyModifiers::NONE
    };
    Ok(KeyEvent::new(code, modifiers))
}
