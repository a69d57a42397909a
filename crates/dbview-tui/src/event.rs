//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use dbview_app::message::Message;
use dbview_app::InputKey;
use dbview_core::prelude::*;

/// Poll interval; also the period of `Message::Tick`
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        // Tick on timeout drives the loading spinner
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(
            key_event_to_input(key(KeyCode::Char('r'))),
            Some(InputKey::Char('r'))
        );
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(event), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_event_to_input(key(KeyCode::Up)), Some(InputKey::Up));
        assert_eq!(key_event_to_input(key(KeyCode::Down)), Some(InputKey::Down));
        assert_eq!(key_event_to_input(key(KeyCode::Left)), Some(InputKey::Left));
        assert_eq!(
            key_event_to_input(key(KeyCode::Right)),
            Some(InputKey::Right)
        );
        assert_eq!(
            key_event_to_input(key(KeyCode::PageDown)),
            Some(InputKey::PageDown)
        );
        assert_eq!(key_event_to_input(key(KeyCode::End)), Some(InputKey::End));
    }

    #[test]
    fn test_backtab() {
        let shifted = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(shifted), Some(InputKey::BackTab));
        assert_eq!(
            key_event_to_input(key(KeyCode::BackTab)),
            Some(InputKey::BackTab)
        );
    }

    #[test]
    fn test_uppercase_letters() {
        let event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(event), Some(InputKey::Char('G')));
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        assert_eq!(key_event_to_input(key(KeyCode::Insert)), None);
        assert_eq!(key_event_to_input(key(KeyCode::F(5))), None);
    }
}
