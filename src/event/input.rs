// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! This module provides a unified key event. Key events read by a
//! concrete key source (crossterm in terminal mode, a script in tests) are
//! converted here before the input listener looks at them.

use crate::error::GridError;
use bitflags::bitflags;
use std::str::FromStr;

bitflags! {
    /// Represents key modifiers (shift, control, alt, etc.).
    #[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const SUPER = 0b0000_1000;
        const NONE = 0b0000_0000;
    }
}

#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyEventKind {
    Press,
    Repeat,
    Release,
}

#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeyCode {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Tab,
    Delete,
    /// F key, `KeyCode::F(1)` is F1.
    F(u8),
    Char(char),
    Esc,
    /// anything the source could not map
    Other,
}

impl FromStr for KeyCode {
    type Err = GridError;

    /// Accepts "Esc", "Enter", "Tab", "F1".."F24" and single characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().as_str() {
            "esc" | "escape" => KeyCode::Esc,
            "enter" | "return" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            l => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => match l.strip_prefix('f').map(str::parse::<u8>) {
                        Some(Ok(n)) if (1..=24).contains(&n) => KeyCode::F(n),
                        _ => return Err(GridError::InvalidKey(s.to_string())),
                    },
                }
            }
        };
        Ok(key)
    }
}

/// Represents a key event.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct KeyEvent {
    /// The key itself.
    pub code: KeyCode,
    /// Additional key modifiers.
    pub modifiers: KeyModifiers,
    /// Kind of event.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
        }
    }

    pub const fn new_with_kind(
        code: KeyCode,
        modifiers: KeyModifiers,
        kind: KeyEventKind,
    ) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
        }
    }

    pub fn is_release(&self) -> bool {
        self.kind == KeyEventKind::Release
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        KeyEvent::new(code, KeyModifiers::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_names() {
        assert_eq!("Esc".parse::<KeyCode>().unwrap(), KeyCode::Esc);
        assert_eq!("escape".parse::<KeyCode>().unwrap(), KeyCode::Esc);
        assert_eq!("F3".parse::<KeyCode>().unwrap(), KeyCode::F(3));
        assert_eq!("f12".parse::<KeyCode>().unwrap(), KeyCode::F(12));
        assert_eq!("q".parse::<KeyCode>().unwrap(), KeyCode::Char('q'));
        assert_eq!("F".parse::<KeyCode>().unwrap(), KeyCode::Char('F'));
        assert_eq!("space".parse::<KeyCode>().unwrap(), KeyCode::Char(' '));
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!("F99".parse::<KeyCode>(), Err(GridError::InvalidKey(_))));
        assert!("hyper".parse::<KeyCode>().is_err());
        assert!("".parse::<KeyCode>().is_err());
    }

    #[test]
    fn key_code_converts_to_press() {
        let e: KeyEvent = KeyCode::F(3).into();
        assert_eq!(e.kind, KeyEventKind::Press);
        assert!(!e.is_release());
    }
}
