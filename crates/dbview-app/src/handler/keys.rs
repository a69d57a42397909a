//! Key event handlers for the main screen and modals

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.modal.is_some() {
        handle_key_modal(key)
    } else {
        handle_key_normal(key)
    }
}

/// Handle key events while a modal is open
fn handle_key_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') | InputKey::Enter => Some(Message::CloseModal),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Scroll modal content
        InputKey::Char('k') | InputKey::Up => Some(Message::MoveUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::MoveDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::Home),

        _ => None,
    }
}

/// Handle key events on the main screen
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Focus
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),

        // Vertical navigation
        InputKey::Char('k') | InputKey::Up => Some(Message::MoveUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::MoveDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::Home),
        InputKey::End | InputKey::Char('G') => Some(Message::End),

        // Column scrolling
        InputKey::Char('h') | InputKey::Left => Some(Message::ScrollLeft),
        InputKey::Char('l') | InputKey::Right => Some(Message::ScrollRight),

        // Actions
        InputKey::Enter => Some(Message::Activate),
        InputKey::Char('r') => Some(Message::Refresh),
        InputKey::Char('e') => Some(Message::ShowErrorDetails),

        _ => None,
    }
}
