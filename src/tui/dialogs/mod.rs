//! Overlay dialogs

pub mod help;
