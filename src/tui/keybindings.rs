//! Keybinding definitions
//!
//! Listed for the help overlay; the handler implements them.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: &'static str,
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active while the step's text input is focused
    Input,
    /// Active while a button or navigation link is focused
    Control,
}

impl KeyContext {
    pub fn title(self) -> &'static str {
        match self {
            KeyContext::Global => "Global Keys",
            KeyContext::Input => "Form Input",
            KeyContext::Control => "Buttons and Links",
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Focus next element",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        description: "Focus previous element",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::PageDown,
        modifiers: KeyModifiers::NONE,
        description: "Scroll step content down",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::PageUp,
        modifiers: KeyModifiers::NONE,
        description: "Scroll step content up",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::F(1),
        modifiers: KeyModifiers::NONE,
        description: "Show/hide help",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit",
        context: KeyContext::Global,
    },
    // Input
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Submit the step (next or submit)",
        context: KeyContext::Input,
    },
    Keybinding {
        key: KeyCode::Backspace,
        modifiers: KeyModifiers::NONE,
        description: "Delete character",
        context: KeyContext::Input,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Leave the input",
        context: KeyContext::Input,
    },
    // Buttons and links
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Activate",
        context: KeyContext::Control,
    },
    Keybinding {
        key: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        description: "Activate",
        context: KeyContext::Control,
    },
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        description: "Quit",
        context: KeyContext::Control,
    },
];

/// Keybindings of exactly one context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::SHIFT) && !matches!(kb.key, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", kb.key),
    };

    parts.push(key_str);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keybinding() {
        let shift_tab = get_keybindings(KeyContext::Global)
            .into_iter()
            .find(|kb| kb.key == KeyCode::BackTab)
            .unwrap();
        assert_eq!(format_keybinding(shift_tab), "Shift+Tab");

        let quit = get_keybindings(KeyContext::Global)
            .into_iter()
            .find(|kb| kb.key == KeyCode::Char('c'))
            .unwrap();
        assert_eq!(format_keybinding(quit), "Ctrl+c");
    }

    #[test]
    fn test_space_is_named() {
        let space = get_keybindings(KeyContext::Control)
            .into_iter()
            .find(|kb| kb.key == KeyCode::Char(' '))
            .unwrap();
        assert_eq!(format_keybinding(space), "Space");
    }

    #[test]
    fn test_every_context_has_bindings() {
        for context in [KeyContext::Global, KeyContext::Input, KeyContext::Control] {
            assert!(!get_keybindings(context).is_empty(), "{}", context.title());
        }
    }
}
