//! Terminal key events to key identifiers

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use reposcope_keymap::Key;

/// Convert a crossterm key event, or `None` for keys without an identifier
pub fn key_from_event(event: &KeyEvent) -> Option<Key> {
    let key = match event.code {
        KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
            if !c.is_ascii() {
                return None;
            }
            Key::ctrl(c.to_ascii_uppercase())
        }
        KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::ALT) => {
            if !c.is_ascii() {
                return None;
            }
            Key::meta(c)
        }
        KeyCode::Char(c) => Key::char(c),
        KeyCode::Enter => Key::RETURN,
        KeyCode::Tab => Key::TAB,
        KeyCode::Esc => Key::ESCAPE,
        KeyCode::Backspace => Key::BACKSPACE,
        KeyCode::Up => Key::UP,
        KeyCode::Down => Key::DOWN,
        KeyCode::Left => Key::LEFT,
        KeyCode::Right => Key::RIGHT,
        KeyCode::Home => Key::HOME,
        KeyCode::End => Key::END,
        KeyCode::PageUp => Key::PAGE_UP,
        KeyCode::PageDown => Key::PAGE_DOWN,
        KeyCode::Insert => Key::INSERT,
        KeyCode::Delete => Key::DELETE,
        KeyCode::F(n) if (1..=12).contains(&n) => Key::f(n),
        _ => return None,
    };

    Some(key)
}
