//! Maps terminal key events onto preview keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use writeme_core::preview::PreviewKey;

pub fn map_key_event(key: KeyEvent) -> Option<PreviewKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(PreviewKey::Cancel),
            KeyCode::Char('a') => Some(PreviewKey::Home),
            KeyCode::Char('e') => Some(PreviewKey::End),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(PreviewKey::Confirm),
        KeyCode::Esc => Some(PreviewKey::Cancel),
        KeyCode::Backspace => Some(PreviewKey::Backspace),
        KeyCode::Delete => Some(PreviewKey::Delete),
        KeyCode::Left => Some(PreviewKey::Left),
        KeyCode::Right => Some(PreviewKey::Right),
        KeyCode::Home => Some(PreviewKey::Home),
        KeyCode::End => Some(PreviewKey::End),
        KeyCode::Char(c) => Some(PreviewKey::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn enter_confirms_and_escape_cancels() {
        assert_eq!(map_key_event(key(KeyCode::Enter)), Some(PreviewKey::Confirm));
        assert_eq!(map_key_event(key(KeyCode::Esc)), Some(PreviewKey::Cancel));
        assert_eq!(map_key_event(ctrl('c')), Some(PreviewKey::Cancel));
    }

    #[test]
    fn characters_are_typed() {
        assert_eq!(map_key_event(key(KeyCode::Char('q'))), Some(PreviewKey::Char('q')));
        let shifted = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(map_key_event(shifted), Some(PreviewKey::Char('Q')));
    }

    #[test]
    fn emacs_line_motions() {
        assert_eq!(map_key_event(ctrl('a')), Some(PreviewKey::Home));
        assert_eq!(map_key_event(ctrl('e')), Some(PreviewKey::End));
        assert_eq!(map_key_event(ctrl('x')), None);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key_event(key(KeyCode::Up)), None);
        assert_eq!(map_key_event(key(KeyCode::F(1))), None);
    }
}
