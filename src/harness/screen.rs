//! Element model of a rendered wizard page
//!
//! The TUI draws cells, not elements. This module lists what the wizard
//! shows as addressable elements so selectors, clicks and focus queries can
//! be answered without parsing the terminal buffer.

use crate::tui::views::result::FOCUS_RESET_LABEL;
use crate::tui::App;
use crate::wizard::{FocusTarget, StepContent};

use super::selector::Selector;

/// Element id of the plain content text on fieldless steps
pub const CONTENT_TEXT_ID: &str = "content-text";
/// Element id of the focus-reset anchor
pub const FOCUS_RESET_ID: &str = "focus-reset";

/// What an element is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    ResultText,
    FocusReset,
    NavLink,
    Header,
    FormField,
    /// Error text inside the form field with this test id
    FieldError(String),
    Input,
    ContentText,
    Button,
}

/// One visible element of the page
#[derive(Debug, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub test_id: Option<String>,
    pub id: Option<String>,
    pub text: String,
    /// Focus target backing the element, when it can hold focus
    pub focus: Option<FocusTarget>,
}

impl Element {
    fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            test_id: None,
            id: None,
            text: text.into(),
            focus: None,
        }
    }

    fn with_test_id(mut self, test_id: &str) -> Self {
        self.test_id = Some(test_id.to_string());
        self
    }

    fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    fn with_focus(mut self, target: FocusTarget) -> Self {
        self.focus = Some(target);
        self
    }

    pub fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::TestId(value) => self.test_id.as_deref() == Some(value.as_str()),
            Selector::Id(value) => self.id.as_deref() == Some(value.as_str()),
            Selector::Input => self.kind == ElementKind::Input,
            Selector::FormFieldError(field) => {
                matches!(&self.kind, ElementKind::FieldError(f) if f == field)
            }
            Selector::PrimaryButton => self.focus == Some(FocusTarget::PrimaryButton),
        }
    }
}

/// Snapshot of every element currently displayed
#[derive(Debug, Clone)]
pub struct Screen {
    elements: Vec<Element>,
}

impl Screen {
    /// Collect the elements of `app` in document order
    pub fn capture(app: &App) -> Self {
        let active = app.active_step_index();
        let mut elements = vec![
            Element::new(ElementKind::ResultText, app.controller.result_text())
                .with_test_id("result-text"),
            Element::new(ElementKind::FocusReset, FOCUS_RESET_LABEL)
                .with_id(FOCUS_RESET_ID)
                .with_focus(FocusTarget::FocusReset),
        ];

        for (index, step) in app.page.steps.iter().enumerate() {
            let mut link = Element::new(ElementKind::NavLink, step.title)
                .with_id(&format!("navigation-link-{}", index + 1));
            if index < active {
                link = link.with_focus(FocusTarget::NavLink(index));
            }
            elements.push(link);
        }

        if let Some(step) = app.active_step() {
            elements.push(
                Element::new(ElementKind::Header, step.title)
                    .with_id("step-header")
                    .with_focus(FocusTarget::Header),
            );

            match &step.content {
                StepContent::Field(field) => {
                    elements.push(
                        Element::new(ElementKind::FormField, field.label)
                            .with_test_id(field.form_field_test_id),
                    );
                    let value = app
                        .inputs
                        .get(active)
                        .map(|input| input.value().to_string())
                        .unwrap_or_default();
                    elements.push(
                        Element::new(ElementKind::Input, value)
                            .with_test_id(field.input_test_id)
                            .with_focus(FocusTarget::Input),
                    );
                    if let Some(error) = app.controller.error_text(active) {
                        elements.push(Element::new(
                            ElementKind::FieldError(field.form_field_test_id.to_string()),
                            error,
                        ));
                    }
                }
                StepContent::Text(text) => {
                    elements.push(
                        Element::new(ElementKind::ContentText, *text).with_id(CONTENT_TEXT_ID),
                    );
                }
            }
        }

        elements.push(
            Element::new(ElementKind::Button, app.strings.cancel_button.as_str())
                .with_id("cancel-button")
                .with_focus(FocusTarget::CancelButton),
        );
        if active > 0 {
            elements.push(
                Element::new(ElementKind::Button, app.strings.previous_button.as_str())
                    .with_id("previous-button")
                    .with_focus(FocusTarget::PreviousButton),
            );
        }
        elements.push(
            Element::new(ElementKind::Button, app.primary_label())
                .with_id("primary-button")
                .with_focus(FocusTarget::PrimaryButton),
        );

        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// First element matching `selector`
    pub fn find(&self, selector: &Selector) -> Option<&Element> {
        self.elements.iter().find(|e| e.matches(selector))
    }

    /// Element backed by `target`
    pub fn by_focus(&self, target: FocusTarget) -> Option<&Element> {
        self.elements.iter().find(|e| e.focus == Some(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::PageRoute;

    #[test]
    fn test_form_page_elements() {
        let app = App::new(PageRoute::NativeFormSubmit.page());
        let screen = Screen::capture(&app);

        let input = screen.find(&Selector::test_id("first-name-input")).unwrap();
        assert_eq!(input.kind, ElementKind::Input);
        assert!(screen.find(&Selector::test_id("first-name-form-field")).is_some());
        assert!(screen
            .find(&Selector::form_field_error("first-name-form-field"))
            .is_none());
        assert!(screen.find(&Selector::id(CONTENT_TEXT_ID)).is_none());
        assert!(screen.find(&Selector::id("previous-button")).is_none());
        assert_eq!(screen.find(&Selector::PrimaryButton).unwrap().text, "Next");
    }

    #[test]
    fn test_simple_page_elements() {
        let mut app = App::new(PageRoute::Simple.page());
        app.request(app.primary_request());
        let screen = Screen::capture(&app);

        assert_eq!(screen.find(&Selector::id(CONTENT_TEXT_ID)).unwrap().text, "Content 2");
        assert_eq!(
            screen.by_focus(FocusTarget::NavLink(0)).unwrap().text,
            "Step 1"
        );
        assert!(screen.by_focus(FocusTarget::NavLink(1)).is_none());
        assert!(screen.find(&Selector::id("previous-button")).is_some());
    }

    #[test]
    fn test_result_text_is_always_present() {
        let app = App::new(PageRoute::Simple.page());
        let screen = Screen::capture(&app);
        let result = screen.find(&Selector::test_id("result-text")).unwrap();
        assert_eq!(result.text, "");
    }
}
