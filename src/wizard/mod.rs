//! Multi-step wizard core
//!
//! The wizard widget raises navigation, submit and cancel requests; the
//! [`StepFormController`] decides whether each request is allowed by checking
//! the form values of the steps involved.
//!
//! # Example
//!
//! ```rust
//! use stepform::wizard::{PageRoute, StepFormController};
//!
//! let page = PageRoute::NativeFormSubmit.page();
//! let mut controller = StepFormController::for_page(&page);
//!
//! controller.on_navigate(1);
//! assert_eq!(controller.active_step_index(), 0);
//! assert_eq!(controller.error_text(0), Some("This field cannot be left blank."));
//!
//! controller.set_value(0, "MyFirstName");
//! controller.on_navigate(1);
//! assert_eq!(controller.active_step_index(), 1);
//! ```

pub mod controller;
pub mod focus;
pub mod pages;
pub mod state;

pub use controller::{NavigationReason, StepFormController, WizardRequest, BLANK_FIELD_ERROR};
pub use focus::{FocusRing, FocusTarget};
pub use pages::{FieldDefinition, PageDefinition, PageRoute, StepContent, StepDefinition};
pub use state::{StateChange, WizardState};
