//! Layout definitions for the TUI
//!
//! Result text on top, step navigation on the left, the active step on the
//! right, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the wizard page
pub struct WizardLayout {
    /// Result-text display region
    pub result: Rect,
    /// Step navigation list
    pub navigation: Rect,
    /// Active step title
    pub header: Rect,
    /// Step container
    pub content: Rect,
    /// Cancel / Previous / primary buttons
    pub actions: Rect,
    pub status_bar: Rect,
}

impl WizardLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Result text
                Constraint::Min(8),    // Wizard
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(24), // Navigation
                Constraint::Min(30),    // Step
            ])
            .split(vertical[1]);

        let step = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(3),    // Content
                Constraint::Length(1), // Actions
            ])
            .split(horizontal[1]);

        Self {
            result: vertical[0],
            navigation: horizontal[0],
            header: step[0],
            content: step[1],
            actions: step[2],
            status_bar: vertical[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
