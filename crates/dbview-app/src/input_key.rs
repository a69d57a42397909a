//! Abstract input key event, independent of terminal library.
//!
//! Keeps dbview-app free of crossterm types; the TUI converts terminal
//! events into [`InputKey`] at its boundary.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_keys_compare_by_value() {
        assert_eq!(InputKey::Char('q'), InputKey::Char('q'));
        assert_ne!(InputKey::Char('c'), InputKey::CharCtrl('c'));
    }
}
