//! Keyboard scenarios for the wizard pages, driven through the headless
//! page driver.

use stepform::harness::{PageDriver, Selector};
use stepform::wizard::BLANK_FIELD_ERROR;

const FORM_URL: &str = "/#/light/wizard/native-form-submit";
const SIMPLE_URL: &str = "/#/light/wizard/simple?visualRefresh=false";

fn open(url: &str) -> PageDriver {
    let page = PageDriver::open(url).unwrap();
    assert!(page.is_displayed(&Selector::PrimaryButton));
    page
}

fn result_text(page: &PageDriver) -> String {
    page.get_text(&Selector::test_id("result-text")).unwrap()
}

fn content_text(page: &PageDriver) -> String {
    page.get_text(&Selector::id("content-text")).unwrap()
}

mod native_form_submit {
    use super::*;

    #[test]
    fn enter_on_blank_input_shows_field_error() {
        let mut page = open(FORM_URL);
        page.click(&Selector::test_id("first-name-input")).unwrap();
        page.keys(&["Enter"]).unwrap();

        let error = page
            .get_text(&Selector::form_field_error("first-name-form-field"))
            .unwrap();
        assert!(error.contains(BLANK_FIELD_ERROR));
        assert_eq!(page.app().active_step_index(), 0);
    }

    #[test]
    fn enter_on_filled_input_navigates() {
        let mut page = open(FORM_URL);
        page.click(&Selector::test_id("first-name-input")).unwrap();
        page.type_text("MyFirstName").unwrap();
        page.keys(&["Enter"]).unwrap();

        assert!(result_text(&page)
            .contains("Navigate action was called. Starting index: 0. Ending index: 1"));
        assert!(page.is_displayed(&Selector::test_id("last-name-input")));
    }

    #[test]
    fn enter_on_last_step_submits_after_validation() {
        let mut page = open(FORM_URL);
        page.click(&Selector::test_id("first-name-input")).unwrap();
        page.type_text("MyFirstName").unwrap();
        page.keys(&["Enter"]).unwrap();

        let last_name = Selector::test_id("last-name-input");
        page.click(&last_name).unwrap();
        page.keys(&["Enter"]).unwrap();

        let error = page
            .get_text(&Selector::form_field_error("last-name-form-field"))
            .unwrap();
        assert!(error.contains(BLANK_FIELD_ERROR));
        assert!(!result_text(&page).contains("Submit action was called."));

        page.click(&last_name).unwrap();
        page.type_text("MyLastName").unwrap();
        page.keys(&["Enter"]).unwrap();

        assert!(result_text(&page).contains("Submit action was called."));
        assert!(!page.is_displayed(&Selector::form_field_error("last-name-form-field")));
    }

    #[test]
    fn error_clears_once_the_field_has_text() {
        let mut page = open(FORM_URL);
        page.click(&Selector::test_id("first-name-input")).unwrap();
        page.keys(&["Enter"]).unwrap();
        page.type_text("A").unwrap();

        assert!(!page.is_displayed(&Selector::form_field_error("first-name-form-field")));
    }

    #[test]
    fn cancel_button_reports_cancel() {
        let mut page = open(FORM_URL);
        page.click(&Selector::id("cancel-button")).unwrap();
        assert_eq!(result_text(&page), "Cancel action was called.");
        assert_eq!(page.app().active_step_index(), 0);
    }

    #[test]
    fn primary_button_on_blank_step_is_blocked() {
        let mut page = open(FORM_URL);
        page.click_primary_button().unwrap();

        assert_eq!(page.app().active_step_index(), 0);
        assert_eq!(result_text(&page), "");
        assert!(page.is_displayed(&Selector::form_field_error("first-name-form-field")));
    }
}

mod keyboard_navigation {
    use super::*;

    const CONFIRM_KEYS: [&str; 2] = ["Enter", "Space"];

    #[test]
    fn navigation_link_to_first_step() {
        let mut page = open(SIMPLE_URL);
        assert_ne!(page.focused_element_text().as_deref(), Some("Step 1"));

        page.click_primary_button().unwrap();
        page.reset_focus().unwrap();
        page.keys(&["Tab", "Enter"]).unwrap();
        assert_eq!(content_text(&page), "Content 1");
    }

    #[test]
    fn next_step() {
        for key in CONFIRM_KEYS {
            let mut page = open(SIMPLE_URL);
            page.reset_focus().unwrap();
            page.keys(&["Tab", "Tab", key]).unwrap();
            assert_eq!(content_text(&page), "Content 2", "{}", key);
        }
    }

    #[test]
    fn previous_step() {
        for key in CONFIRM_KEYS {
            let mut page = open(SIMPLE_URL);
            page.click_primary_button().unwrap();
            page.keys(&["Shift", "Tab", key]).unwrap();
            assert_eq!(content_text(&page), "Content 1", "{}", key);
        }
    }

    #[test]
    fn header_focused_after_next() {
        let mut page = open(SIMPLE_URL);
        page.reset_focus().unwrap();
        page.keys(&["Tab", "Tab", "Space"]).unwrap();
        assert_eq!(page.focused_element_text().as_deref(), Some("Step 2"));
    }

    #[test]
    fn header_focused_after_previous() {
        let mut page = open(SIMPLE_URL);
        page.click_primary_button().unwrap();
        page.keys(&["Shift", "Tab", "Space"]).unwrap();
        assert_eq!(page.focused_element_text().as_deref(), Some("Step 1"));
    }

    #[test]
    fn header_receives_focus_only_programmatically() {
        let mut page = open(SIMPLE_URL);
        page.reset_focus().unwrap();
        page.keys(&["Tab", "Tab", "Space"]).unwrap();
        assert_eq!(page.focused_element_text().as_deref(), Some("Step 2"));

        page.keys(&["Tab", "Shift", "Tab"]).unwrap();
        assert_ne!(page.focused_element_text().as_deref(), Some("Step 2"));
    }

    #[test]
    fn full_cycle_never_lands_on_header() {
        let mut page = open(SIMPLE_URL);
        page.reset_focus().unwrap();
        for _ in 0..10 {
            page.keys(&["Tab"]).unwrap();
            assert_ne!(page.focused_element_text().as_deref(), Some("Step 1"));
        }
    }
}

mod scroll_to_top {
    use super::*;

    #[test]
    fn content_returns_to_view_after_navigation() {
        let mut page = open(SIMPLE_URL);
        let content = Selector::id("content-text");

        page.scroll_content(5);
        assert!(!page.is_displayed_in_viewport(&content));

        page.click_primary_button().unwrap();
        assert!(page.is_displayed_in_viewport(&content));
        assert_eq!(page.app().scroll_offset, 0);
    }

    #[test]
    fn content_scrolled_by_keyboard_returns_after_navigation() {
        let mut page = open(SIMPLE_URL);
        let content = Selector::id("content-text");

        page.reset_focus().unwrap();
        page.keys(&["PageDown", "PageDown", "PageDown"]).unwrap();
        assert!(!page.is_displayed_in_viewport(&content));

        page.keys(&["Tab", "Tab", "Enter"]).unwrap();
        assert_eq!(content_text(&page), "Content 2");
        assert!(page.is_displayed_in_viewport(&content));
    }
}
