//! Reusable widgets for the TUI

pub mod button;
pub mod input;

pub use button::Button;
pub use input::{InputBox, TextInput};
