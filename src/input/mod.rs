//! Terminal-independent key representation
//!
//! Crossterm key events are translated into [`Key`] before they reach the
//! editor, so the mode state machine can be driven from tests without a
//! terminal.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A single key press as the editor sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable ASCII byte (32..=126)
    Char(u8),
    /// Control chord, holding the lowercase letter (`Ctrl(b'q')`)
    Ctrl(u8),
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
    Backspace,
}

impl Key {
    /// Parse a plain byte, the way a raw terminal would deliver it.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x1B => Some(Key::Escape),
            0x08 | 0x7F => Some(Key::Backspace),
            b'\r' | b'\n' => Some(Key::Enter),
            0x01..=0x1A => Some(Key::Ctrl(byte - 1 + b'a')),
            0x20..=0x7E => Some(Key::Char(byte)),
            _ => None,
        }
    }

    /// Keys for every byte of `text`; unknown bytes are skipped.
    pub fn sequence(text: &str) -> Vec<Self> {
        text.bytes().filter_map(Self::from_byte).collect()
    }
}

impl TryFrom<KeyEvent> for Key {
    type Error = KeyEvent;

    /// Release events and keys the editor has no use for are rejected;
    /// press and repeat events are accepted.
    fn try_from(event: KeyEvent) -> Result<Self, Self::Error> {
        if event.kind == KeyEventKind::Release {
            return Err(event);
        }

        let key = match event.code {
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                if c.is_ascii_alphabetic() {
                    Key::Ctrl(c.to_ascii_lowercase() as u8)
                } else {
                    return Err(event);
                }
            }
            KeyCode::Char(c) if (' '..='~').contains(&c) => Key::Char(c as u8),
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            _ => return Err(event),
        };

        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte() {
        assert_eq!(Key::from_byte(b'h'), Some(Key::Char(b'h')));
        assert_eq!(Key::from_byte(b':'), Some(Key::Char(b':')));
        assert_eq!(Key::from_byte(0x1B), Some(Key::Escape));
        assert_eq!(Key::from_byte(0x7F), Some(Key::Backspace));
        assert_eq!(Key::from_byte(b'\r'), Some(Key::Enter));
        assert_eq!(Key::from_byte(0x11), Some(Key::Ctrl(b'q')));
        assert_eq!(Key::from_byte(0xC3), None);
    }

    #[test]
    fn test_sequence() {
        assert_eq!(
            Key::sequence(":q\n"),
            vec![Key::Char(b':'), Key::Char(b'q'), Key::Enter]
        );
    }

    #[test]
    fn test_from_crossterm() {
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(Key::try_from(ctrl_q), Ok(Key::Ctrl(b'q')));

        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(Key::try_from(shifted), Ok(Key::Char(b'A')));

        let arrow = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(Key::try_from(arrow), Ok(Key::Up));

        let unicode = KeyEvent::new(KeyCode::Char('é'), KeyModifiers::NONE);
        assert!(Key::try_from(unicode).is_err());

        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert!(Key::try_from(tab).is_err());
    }

    #[test]
    fn test_release_rejected_repeat_accepted() {
        let held =
            KeyEvent::new_with_kind(KeyCode::Char('j'), KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(Key::try_from(held), Ok(Key::Char(b'j')));

        let released =
            KeyEvent::new_with_kind(KeyCode::Char('j'), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(Key::try_from(released).is_err());
    }
}
