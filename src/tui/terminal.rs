//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are restored on exit and from the
//! panic hook.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the wizard page until the user quits
pub fn run_tui(app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, app, tick_rate);
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, tick_rate: Duration) -> Result<()> {
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        match events.next()? {
            Event::Tick | Event::Resize(_, _) => {}
            event => handle_event(app, event)?,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
