//! Terminal colors and display attributes

use std::fmt;

use bitflags::bitflags;
use reposcope_symbols::enum_equals;
use serde::{Serialize, Serializer};

use crate::error::LineInfoError;

/// A terminal color
///
/// `Default` is the "use the terminal's default" sentinel, substituted with
/// the default line's colors when a color pair is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Extended palette entry (8-255)
    Indexed(u8),
}

const COLOR_NAMES: &[(&str, Color)] = &[
    ("default", Color::Default),
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

impl Color {
    /// Color for a palette index; 0-7 are the named colors
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Black,
            1 => Self::Red,
            2 => Self::Green,
            3 => Self::Yellow,
            4 => Self::Blue,
            5 => Self::Magenta,
            6 => Self::Cyan,
            7 => Self::White,
            n => Self::Indexed(n),
        }
    }

    /// Parse a color name (`"red"`, `"Default"`) or a palette index (`"0"`-`"255"`)
    pub fn from_name(name: &str) -> Result<Self, LineInfoError> {
        if let Some((_, color)) = COLOR_NAMES.iter().find(|(n, _)| enum_equals(n, name)) {
            return Ok(*color);
        }

        name.parse::<u8>()
            .map(Self::from_index)
            .map_err(|_| LineInfoError::UnknownColor {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indexed(n) => write!(f, "{}", n),
            color => {
                let name = COLOR_NAMES
                    .iter()
                    .find(|(_, c)| c == color)
                    .map(|(n, _)| *n)
                    .unwrap_or("default");
                f.write_str(name)
            }
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

bitflags! {
    /// Display attributes; the empty set is "normal"
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const BLINK = 1 << 0;
        const BOLD = 1 << 1;
        const DIM = 1 << 2;
        const REVERSE = 1 << 3;
        const STANDOUT = 1 << 4;
        const UNDERLINE = 1 << 5;
        const ITALIC = 1 << 6;
    }
}

const ATTR_NAMES: &[(&str, Attr)] = &[
    ("normal", Attr::empty()),
    ("blink", Attr::BLINK),
    ("bold", Attr::BOLD),
    ("dim", Attr::DIM),
    ("reverse", Attr::REVERSE),
    ("standout", Attr::STANDOUT),
    ("underline", Attr::UNDERLINE),
    ("italic", Attr::ITALIC),
];

impl Attr {
    pub const NORMAL: Self = Self::empty();

    /// Parse a single attribute name (`"bold"`, `"Normal"`)
    pub fn from_attr_name(name: &str) -> Result<Self, LineInfoError> {
        ATTR_NAMES
            .iter()
            .find(|(n, _)| enum_equals(n, name))
            .map(|(_, attr)| *attr)
            .ok_or_else(|| LineInfoError::UnknownAttribute {
                name: name.to_string(),
            })
    }

    /// Combine several attribute names into one set
    pub fn from_attr_names<S: AsRef<str>>(names: &[S]) -> Result<Self, LineInfoError> {
        let mut attr = Self::NORMAL;
        for name in names {
            attr |= Self::from_attr_name(name.as_ref())?;
        }
        Ok(attr)
    }
}
