//! Application state for the TUI
//!
//! The App owns the page definition, the controller, the per-step input
//! buffers and the widget-level state (focus, scroll, help overlay). Every
//! controller call goes through [`App::request`] or [`App::edit_input`], which
//! apply the returned state change to focus and scroll.

use uuid::Uuid;

use crate::actions::{ActionEntry, ActionLogger};
use crate::config::WizardStrings;
use crate::wizard::{
    FocusRing, FocusTarget, NavigationReason, PageDefinition, StateChange, StepContent,
    StepDefinition, StepFormController, WizardRequest,
};

use super::widgets::TextInput;

/// Main application state
pub struct App {
    pub page: PageDefinition,
    pub strings: WizardStrings,
    pub controller: StepFormController,

    /// One input buffer per step, kept in sync with the controller values
    pub inputs: Vec<TextInput>,

    /// Element holding keyboard focus, if any
    pub focus: Option<FocusTarget>,

    /// Vertical scroll of the step content
    pub scroll_offset: u16,

    pub show_help: bool,
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    session_id: Uuid,
    action_log: Option<ActionLogger>,
}

impl App {
    /// Open a page with default strings and no action log
    pub fn new(page: PageDefinition) -> Self {
        let controller = StepFormController::for_page(&page);
        let inputs = vec![TextInput::new(); page.step_count()];
        Self {
            page,
            strings: WizardStrings::default(),
            controller,
            inputs,
            focus: None,
            scroll_offset: 0,
            show_help: false,
            should_quit: false,
            status_message: None,
            session_id: Uuid::new_v4(),
            action_log: None,
        }
    }

    pub fn with_strings(mut self, strings: WizardStrings) -> Self {
        self.strings = strings;
        self
    }

    /// Record every handled request in `logger`
    pub fn with_action_log(mut self, logger: ActionLogger) -> Self {
        self.action_log = Some(logger);
        self
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn active_step_index(&self) -> usize {
        self.controller.active_step_index()
    }

    pub fn active_step(&self) -> Option<&StepDefinition> {
        self.page.step(self.active_step_index())
    }

    pub fn is_last_step(&self) -> bool {
        self.page.is_last_step(self.active_step_index())
    }

    /// Label of the primary button on the active step
    pub fn primary_label(&self) -> &str {
        if self.is_last_step() {
            &self.strings.submit_button
        } else {
            &self.strings.next_button
        }
    }

    /// Focus order of the active step
    pub fn focus_ring(&self) -> FocusRing {
        let has_input = self.active_step().and_then(StepDefinition::field).is_some();
        FocusRing::for_step(self.active_step_index(), has_input)
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focus == Some(target)
    }

    /// Move focus to `target` if it exists on the active step
    pub fn set_focus(&mut self, target: FocusTarget) -> bool {
        if self.focus_ring().contains(target) {
            self.focus = Some(target);
            true
        } else {
            false
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus_ring().next(self.focus));
    }

    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focus_ring().prev(self.focus));
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Scroll one line, at most until the last content line leaves the view
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Lines of plain content on the active step; form steps do not scroll
    pub fn content_line_count(&self) -> usize {
        match self.active_step().map(|step| &step.content) {
            Some(StepContent::Text(text)) => text.lines().count().max(1),
            _ => 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.content_line_count()).unwrap_or(u16::MAX)
    }

    /// Request raised by activating `target`, if any
    pub fn request_for(&self, target: FocusTarget) -> Option<WizardRequest> {
        let active = self.active_step_index();
        match target {
            FocusTarget::NavLink(step) if step < active => Some(WizardRequest::Navigate {
                requested_step_index: step,
                reason: NavigationReason::Step,
            }),
            FocusTarget::CancelButton => Some(WizardRequest::Cancel),
            FocusTarget::PreviousButton if active > 0 => Some(WizardRequest::Navigate {
                requested_step_index: active - 1,
                reason: NavigationReason::Previous,
            }),
            FocusTarget::PrimaryButton => Some(self.primary_request()),
            _ => None,
        }
    }

    /// Next on intermediate steps, submit on the last one
    pub fn primary_request(&self) -> WizardRequest {
        if self.is_last_step() {
            WizardRequest::Submit
        } else {
            WizardRequest::Navigate {
                requested_step_index: self.active_step_index() + 1,
                reason: NavigationReason::Next,
            }
        }
    }

    /// Activate a button or link; other targets ignore activation
    pub fn activate(&mut self, target: FocusTarget) -> Option<StateChange> {
        let request = self.request_for(target)?;
        Some(self.request(request))
    }

    /// Hand a request to the controller and apply the resulting change
    pub fn request(&mut self, request: WizardRequest) -> StateChange {
        let starting_index = self.active_step_index();
        let change = self.controller.dispatch(request);

        let logged = self.action_log.as_ref().map(|logger| {
            let entry = ActionEntry::record(
                self.session_id,
                self.page.route.path(),
                request,
                starting_index,
                &change,
                self.controller.result_text(),
            );
            logger.log(&entry)
        });
        match logged {
            Some(Ok(())) => self.clear_status(),
            Some(Err(e)) => self.set_status(format!("Action log unavailable: {}", e)),
            None => {}
        }

        self.apply(&change);
        change
    }

    /// Edit the active step's input and store the new value
    pub fn edit_input(&mut self, edit: impl FnOnce(&mut TextInput)) -> Option<StateChange> {
        let step = self.active_step_index();
        self.active_step().and_then(StepDefinition::field)?;

        let input = self.inputs.get_mut(step)?;
        edit(input);
        let value = input.value().to_string();
        let change = self.controller.set_value(step, value);
        self.apply(&change);
        Some(change)
    }

    /// Move focus and scroll after the wizard state changed
    fn apply(&mut self, change: &StateChange) {
        if change.navigated_to().is_some() {
            self.focus = Some(FocusTarget::Header);
            self.scroll_offset = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::PageRoute;
    use tempfile::TempDir;

    fn form_app() -> App {
        App::new(PageRoute::NativeFormSubmit.page())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.edit_input(|input| input.insert(c));
        }
    }

    #[test]
    fn test_new_app() {
        let app = form_app();
        assert_eq!(app.active_step_index(), 0);
        assert_eq!(app.focus, None);
        assert_eq!(app.primary_label(), "Next");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_edit_input_syncs_controller() {
        let mut app = form_app();
        type_text(&mut app, "Ann");
        assert_eq!(app.controller.state().value(0), "Ann");
        app.edit_input(TextInput::backspace);
        assert_eq!(app.controller.state().value(0), "An");
    }

    #[test]
    fn test_edit_input_ignored_on_text_steps() {
        let mut app = App::new(PageRoute::Simple.page());
        assert!(app.edit_input(|input| input.insert('x')).is_none());
    }

    #[test]
    fn test_navigation_focuses_header_and_resets_scroll() {
        let mut app = form_app();
        type_text(&mut app, "MyFirstName");
        app.scroll_offset = 4;
        app.set_focus(FocusTarget::PrimaryButton);

        let change = app.activate(FocusTarget::PrimaryButton).unwrap();
        assert_eq!(change.navigated_to(), Some(1));
        assert_eq!(app.focus, Some(FocusTarget::Header));
        assert_eq!(app.scroll_offset, 0);
        assert_eq!(app.primary_label(), "Create record");
    }

    #[test]
    fn test_blocked_navigation_keeps_focus() {
        let mut app = form_app();
        app.set_focus(FocusTarget::PrimaryButton);
        app.scroll_offset = 2;

        let change = app.activate(FocusTarget::PrimaryButton).unwrap();
        assert!(change.blocked);
        assert_eq!(app.focus, Some(FocusTarget::PrimaryButton));
        assert_eq!(app.scroll_offset, 2);
    }

    #[test]
    fn test_set_focus_rejects_missing_targets() {
        let mut app = form_app();
        assert!(!app.set_focus(FocusTarget::PreviousButton));
        assert!(!app.set_focus(FocusTarget::NavLink(0)));
        assert!(app.set_focus(FocusTarget::Input));
    }

    #[test]
    fn test_request_for_targets() {
        let mut app = App::new(PageRoute::Simple.page());
        assert_eq!(app.request_for(FocusTarget::Header), None);
        assert_eq!(app.request_for(FocusTarget::NavLink(0)), None);

        app.request(app.primary_request());
        assert_eq!(
            app.request_for(FocusTarget::NavLink(0)),
            Some(WizardRequest::Navigate {
                requested_step_index: 0,
                reason: NavigationReason::Step,
            })
        );
        assert_eq!(
            app.request_for(FocusTarget::PreviousButton),
            Some(WizardRequest::Navigate {
                requested_step_index: 0,
                reason: NavigationReason::Previous,
            })
        );
    }

    #[test]
    fn test_requests_are_logged() {
        let temp_dir = TempDir::new().unwrap();
        let logger = ActionLogger::new(temp_dir.path().join("actions.log"));
        let mut app = form_app().with_action_log(logger.clone());

        app.request(WizardRequest::Cancel);
        app.request(app.primary_request());

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.session_id == app.session_id()));
        assert_eq!(entries[1].outcome, crate::actions::Outcome::Blocked);
    }

    #[test]
    fn test_scroll_is_capped_by_content() {
        let mut app = App::new(PageRoute::Simple.page());
        for _ in 0..10 {
            app.scroll_down();
        }
        assert_eq!(app.scroll_offset, 1);
        app.scroll_up();
        app.scroll_up();
        assert_eq!(app.scroll_offset, 0);

        let mut form = form_app();
        form.scroll_down();
        assert_eq!(form.scroll_offset, 0);
    }

    #[test]
    fn test_log_failure_status_clears_after_next_write() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("actions.log");
        std::fs::create_dir(&log_path).unwrap();
        let mut app = form_app().with_action_log(ActionLogger::new(log_path.clone()));

        app.request(WizardRequest::Cancel);
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Action log unavailable"));

        app.focus_next();
        app.request(WizardRequest::Cancel);
        assert!(app.status_message.is_some());

        std::fs::remove_dir(&log_path).unwrap();
        app.request(WizardRequest::Cancel);
        assert_eq!(app.status_message, None);
    }
}
