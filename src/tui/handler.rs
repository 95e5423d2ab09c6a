//! Event handler for the TUI
//!
//! Routes keyboard events to focus traversal, text editing and widget
//! activation depending on which element holds focus.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;
use crate::wizard::FocusTarget;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) | Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.quit();
        return Ok(());
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter) {
            app.toggle_help();
        }
        return Ok(());
    }

    match key.code {
        KeyCode::F(1) => {
            app.toggle_help();
            return Ok(());
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.focus_prev();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return Ok(());
        }
        KeyCode::Tab => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::PageDown => {
            app.scroll_down();
            return Ok(());
        }
        KeyCode::PageUp => {
            app.scroll_up();
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Some(FocusTarget::Input) => handle_input_key(app, key),
        Some(target) => handle_focused_key(app, target, key),
        None => {
            if key.code == KeyCode::Esc {
                app.quit();
            }
            Ok(())
        }
    }
}

/// Keys while the step's text input is focused
fn handle_input_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Enter inside a form input submits the form
        KeyCode::Enter => {
            app.request(app.primary_request());
        }
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) => {
            app.edit_input(|input| input.insert(c));
        }
        KeyCode::Backspace => {
            app.edit_input(|input| input.backspace());
        }
        KeyCode::Delete => {
            app.edit_input(|input| input.delete());
        }
        KeyCode::Left => {
            app.edit_input(|input| input.move_left());
        }
        KeyCode::Right => {
            app.edit_input(|input| input.move_right());
        }
        KeyCode::Home => {
            app.edit_input(|input| input.move_start());
        }
        KeyCode::End => {
            app.edit_input(|input| input.move_end());
        }
        KeyCode::Esc => {
            app.focus = None;
        }
        _ => {}
    }

    Ok(())
}

/// Keys while a button, link, header or the reset anchor is focused
fn handle_focused_key(app: &mut App, target: FocusTarget, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate(target);
        }
        KeyCode::Esc => {
            app.focus = None;
        }
        KeyCode::Char('q') => {
            app.quit();
        }
        _ => {}
    }

    Ok(())
}
