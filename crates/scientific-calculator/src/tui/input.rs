//! Terminal key mapping
//!
//! Turns crossterm key events into calculator actions. Printable characters
//! are forwarded as typed keys and filtered by the controller's allow-list;
//! function keys reach the buttons a browser user would click.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Type a character
    Type(char),
    /// Evaluate (`Enter`)
    Enter,
    /// Delete the last character (`Backspace`)
    Backspace,
    /// Activate a button by id
    Button(&'static str),
    /// Leave a secondary panel, or clear on the main one
    Escape,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Button("clearComplete"),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => KeyAction::Type(c),
            KeyCode::Enter => KeyAction::Enter,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Delete => KeyAction::Button("clearComplete"),
            KeyCode::Esc => KeyAction::Escape,
            KeyCode::F(1) => KeyAction::Button("help"),
            KeyCode::F(2) => KeyAction::Button("minimise"),
            KeyCode::F(3) => KeyAction::Button("cut"),
            KeyCode::F(5) => KeyAction::Button("MS"),
            KeyCode::F(6) => KeyAction::Button("M+"),
            KeyCode::F(7) => KeyAction::Button("M-"),
            KeyCode::F(8) => KeyAction::Button("MR"),
            KeyCode::F(9) => KeyAction::Button("MC"),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::find_button;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for c in '0'..='9' {
            assert_eq!(handler.handle_key(key_event(KeyCode::Char(c))), KeyAction::Type(c));
        }
    }

    #[test]
    fn test_handle_letters_forwarded() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('s'))),
            KeyAction::Type('s')
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('Z'))),
            KeyAction::Type('Z')
        );
    }

    // ===== Edit key tests =====

    #[test]
    fn test_handle_enter_and_backspace() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Enter)), KeyAction::Enter);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Backspace
        );
    }

    #[test]
    fn test_handle_delete_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Delete)),
            KeyAction::Button("clearComplete")
        );
    }

    #[test]
    fn test_handle_escape() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), KeyAction::Escape);
    }

    // ===== Function key tests =====

    #[test]
    fn test_function_keys_map_to_known_buttons() {
        let handler = InputHandler::new();
        for n in [1, 2, 3, 5, 6, 7, 8, 9] {
            match handler.handle_key(key_event(KeyCode::F(n))) {
                KeyAction::Button(id) => assert!(find_button(id).is_some(), "F{n} -> {id}"),
                other => panic!("F{n} mapped to {other:?}"),
            }
        }
    }

    #[test]
    fn test_unmapped_function_key() {
        let handler = InputHandler::default();
        assert_eq!(handler.handle_key(key_event(KeyCode::F(12))), KeyAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), KeyAction::None);
    }

    // ===== Control key tests =====

    #[test]
    fn test_ctrl_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_ctrl_l_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::Button("clearComplete")
        );
    }

    #[test]
    fn test_ctrl_other_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }
}
