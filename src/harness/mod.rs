//! Headless page driver
//!
//! Opens a wizard route, clicks elements by selector, presses keys and reads
//! back text and focus. Used by the end-to-end tests and `stepform run`.

mod driver;
mod screen;
mod selector;

pub use driver::PageDriver;
pub use screen::{Element, ElementKind, Screen, CONTENT_TEXT_ID, FOCUS_RESET_ID};
pub use selector::Selector;
