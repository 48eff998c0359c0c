//! Key identifiers and key names
//!
//! Keys live in a single integer space, following the curses conventions:
//! - printable characters map to their own code (`'q'` -> 0x71)
//! - control characters are the character masked to its low 5 bits (`^P`)
//! - meta (escape-prefixed) characters are the character offset by 0x80 (`^[x`)
//! - named special keys (arrows, function keys, ...) use the curses codes
//!
//! Names are textual and case-insensitive, so they can come from configuration.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::KeymapError;

const KEY_F0: i32 = 0o410;

/// A key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(i32);

impl Key {
    pub const TAB: Key = Key(b'\t' as i32);
    pub const RETURN: Key = Key(b'\r' as i32);
    pub const ESCAPE: Key = Key(0x1b);
    pub const SPACE: Key = Key(b' ' as i32);

    pub const DOWN: Key = Key(0o402);
    pub const UP: Key = Key(0o403);
    pub const LEFT: Key = Key(0o404);
    pub const RIGHT: Key = Key(0o405);
    pub const HOME: Key = Key(0o406);
    pub const BACKSPACE: Key = Key(0o407);
    pub const DELETE: Key = Key(0o512);
    pub const INSERT: Key = Key(0o513);
    pub const PAGE_DOWN: Key = Key(0o522);
    pub const PAGE_UP: Key = Key(0o523);
    pub const END: Key = Key(0o550);

    /// Wrap a raw key code
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// The raw key code
    pub const fn code(self) -> i32 {
        self.0
    }

    /// A plain character key
    pub const fn char(c: char) -> Self {
        Self(c as i32)
    }

    /// Control-character encoding of `c` (`Key::ctrl('P')` is `^P`)
    pub const fn ctrl(c: char) -> Self {
        Self((c as i32) & 0x1f)
    }

    /// Meta encoding of `c`, as produced by an escape prefix (`^[x`)
    pub const fn meta(c: char) -> Self {
        Self((c as i32) + 0x80)
    }

    /// Function key `F<n>`
    pub const fn f(n: u8) -> Self {
        Self(KEY_F0 + n as i32)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&key_name(*self))
    }
}

/// Catalogue of named keys
pub const KEY_TABLE: &[(&str, Key)] = &[
    ("Enter", Key::RETURN),
    ("Space", Key::SPACE),
    ("Backspace", Key::BACKSPACE),
    ("Tab", Key::TAB),
    ("Escape", Key::ESCAPE),
    ("Left", Key::LEFT),
    ("Right", Key::RIGHT),
    ("Up", Key::UP),
    ("Down", Key::DOWN),
    ("Insert", Key::INSERT),
    ("Delete", Key::DELETE),
    ("Hash", Key::char('#')),
    ("Home", Key::HOME),
    ("End", Key::END),
    ("PageUp", Key::PAGE_UP),
    ("PageDown", Key::PAGE_DOWN),
    ("F1", Key::f(1)),
    ("F2", Key::f(2)),
    ("F3", Key::f(3)),
    ("F4", Key::f(4)),
    ("F5", Key::f(5)),
    ("F6", Key::f(6)),
    ("F7", Key::f(7)),
    ("F8", Key::f(8)),
    ("F9", Key::f(9)),
    ("F10", Key::f(10)),
    ("F11", Key::f(11)),
    ("F12", Key::f(12)),
];

fn is_printable(byte: u8) -> bool {
    byte.is_ascii_graphic() || byte == b' '
}

/// Parse a key name into a key identifier.
///
/// Supported formats:
/// - Catalogued names: "Enter", "tab", "PageUp", "F5" (case-insensitive)
/// - Meta sequences: "^[x"
/// - Control sequences: "^A"
/// - Single printable characters: "q", "G", "?"
pub fn key_value(name: &str) -> Result<Key, KeymapError> {
    if let Some((_, key)) = KEY_TABLE
        .iter()
        .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
    {
        return Ok(*key);
    }

    match name.as_bytes() {
        [b'^', b'[', c] if is_printable(*c) => Ok(Key::meta(*c as char)),
        [b'^', c] if is_printable(*c) => Ok(Key::ctrl(*c as char)),
        [c] if is_printable(*c) => Ok(Key::char(*c as char)),
        _ => Err(KeymapError::UnknownKey {
            name: name.to_string(),
        }),
    }
}

/// Human readable name of a key.
///
/// Catalogued keys use their catalogue name. Other codes below 0x7f are shown
/// quoted (`'q'`, `'^P'`); anything else is shown as `(no key)`.
pub fn key_name(key: Key) -> Cow<'static, str> {
    if let Some((name, _)) = KEY_TABLE.iter().find(|(_, value)| *value == key) {
        return Cow::Borrowed(name);
    }

    match u8::try_from(key.code()) {
        Ok(byte @ 0x20..=0x7e) => Cow::Owned(format!("'{}'", byte as char)),
        Ok(byte @ 0x00..=0x1f) => Cow::Owned(format!("'^{}'", (0x40 | (byte & 0x1f)) as char)),
        _ => Cow::Borrowed("(no key)"),
    }
}
