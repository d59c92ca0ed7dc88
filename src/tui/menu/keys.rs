//! Keyboard input to menu events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::MenuEvent;
use crate::tui::settings;

/// The configurable part of the menu keymap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub exit_key: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            exit_key: settings::MENU_DEFAULT_EXIT_KEY,
        }
    }
}

impl KeyBindings {
    pub fn new(exit_key: char) -> Self {
        Self { exit_key }
    }

    /// Map a crossterm key event. Key releases and unbound keys map to `None`.
    ///
    /// The exit key wins over digits so a digit can be bound to exit.
    pub fn map_key(&self, key: KeyEvent) -> Option<MenuEvent> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(MenuEvent::Interrupt);
        }
        match key.code {
            KeyCode::Up => Some(MenuEvent::Up),
            KeyCode::Down => Some(MenuEvent::Down),
            KeyCode::Enter => Some(MenuEvent::Enter),
            KeyCode::Char(c) => self.map_char(c),
            _ => None,
        }
    }

    /// Decode a raw input token as read from a terminal in raw mode:
    /// `ESC [ A`, `ESC [ B`, `\r`, `\x03`, the exit key or a digit.
    pub fn decode_token(&self, token: &str) -> Option<MenuEvent> {
        match token {
            "\x1b[A" => Some(MenuEvent::Up),
            "\x1b[B" => Some(MenuEvent::Down),
            "\r" => Some(MenuEvent::Enter),
            "\x03" => Some(MenuEvent::Interrupt),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => self.map_char(c),
                    _ => None,
                }
            }
        }
    }

    fn map_char(&self, c: char) -> Option<MenuEvent> {
        if c == self.exit_key {
            return Some(MenuEvent::Exit);
        }
        c.to_digit(10).map(MenuEvent::Digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_enter_and_digits() {
        let keys = KeyBindings::default();
        assert_eq!(keys.map_key(press(KeyCode::Up)), Some(MenuEvent::Up));
        assert_eq!(keys.map_key(press(KeyCode::Down)), Some(MenuEvent::Down));
        assert_eq!(keys.map_key(press(KeyCode::Enter)), Some(MenuEvent::Enter));
        assert_eq!(
            keys.map_key(press(KeyCode::Char('3'))),
            Some(MenuEvent::Digit(3))
        );
        assert_eq!(keys.map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(keys.map_key(press(KeyCode::Esc)), None);
    }

    #[test]
    fn ctrl_c_interrupts() {
        let keys = KeyBindings::default();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keys.map_key(event), Some(MenuEvent::Interrupt));
        assert_eq!(keys.map_key(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn exit_key_is_configurable_and_beats_digits() {
        assert_eq!(
            KeyBindings::default().map_key(press(KeyCode::Char('q'))),
            Some(MenuEvent::Exit)
        );
        let keys = KeyBindings::new('0');
        assert_eq!(keys.map_key(press(KeyCode::Char('0'))), Some(MenuEvent::Exit));
        assert_eq!(keys.map_key(press(KeyCode::Char('q'))), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut event = press(KeyCode::Enter);
        event.kind = KeyEventKind::Release;
        assert_eq!(KeyBindings::default().map_key(event), None);
    }

    #[test]
    fn raw_tokens_decode() {
        let keys = KeyBindings::default();
        assert_eq!(keys.decode_token("\x1b[A"), Some(MenuEvent::Up));
        assert_eq!(keys.decode_token("\x1b[B"), Some(MenuEvent::Down));
        assert_eq!(keys.decode_token("\r"), Some(MenuEvent::Enter));
        assert_eq!(keys.decode_token("\x03"), Some(MenuEvent::Interrupt));
        assert_eq!(keys.decode_token("q"), Some(MenuEvent::Exit));
        assert_eq!(keys.decode_token("7"), Some(MenuEvent::Digit(7)));
        assert_eq!(keys.decode_token("12"), None);
        assert_eq!(keys.decode_token("\x1b[C"), None);
    }
}
