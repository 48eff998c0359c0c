//! Ratatui color backend
//!
//! Records registered color pairs as ratatui styles so line categories can be
//! painted without a curses-style pair table.

use ratatui::style::{Color as TuiColor, Modifier, Style};

use crate::classifier::LineInfo;
use crate::color::{Attr, Color};
use crate::color_pair::{ColorBackend, ColorPairId};
use crate::error::LineInfoError;

/// Color pairs rendered as ratatui styles
#[derive(Debug, Clone, Default)]
pub struct StylePalette {
    base: Style,
    pairs: Vec<Style>,
    /// Refuse `assume_default_colors`, as terminals without default color support do
    pub no_default_colors: bool,
}

impl StylePalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style of the terminal default colors
    pub fn base(&self) -> Style {
        self.base
    }

    /// Style registered under `id`
    pub fn pair(&self, id: ColorPairId) -> Option<Style> {
        self.pairs.get(id.get() - 1).copied()
    }

    /// Style for painting a line: its color pair plus its attributes
    pub fn style(&self, info: &LineInfo) -> Style {
        let colors = info
            .color_pair()
            .and_then(|id| self.pair(id))
            .unwrap_or(self.base);

        colors.add_modifier(modifier(info.attr))
    }
}

impl ColorBackend for StylePalette {
    fn init_pair(&mut self, id: ColorPairId, fg: Color, bg: Color) -> Result<(), LineInfoError> {
        let index = id.get() - 1;
        if index > self.pairs.len() {
            return Err(LineInfoError::Backend {
                message: format!("color pair {} registered out of order", id.get()),
            });
        }

        let style = Style::default().fg(tui_color(fg)).bg(tui_color(bg));
        if index == self.pairs.len() {
            self.pairs
                .try_reserve(1)
                .map_err(|_| LineInfoError::OutOfMemory)?;
            self.pairs.push(style);
        } else {
            self.pairs[index] = style;
        }
        Ok(())
    }

    fn assume_default_colors(&mut self, fg: Color, bg: Color) -> Result<(), LineInfoError> {
        if self.no_default_colors {
            return Err(LineInfoError::Backend {
                message: "default colors are not supported".to_string(),
            });
        }

        self.base = Style::default().fg(tui_color(fg)).bg(tui_color(bg));
        Ok(())
    }
}

/// Convert to a ratatui color; the default sentinel becomes `Reset`
pub fn tui_color(color: Color) -> TuiColor {
    match color {
        Color::Default => TuiColor::Reset,
        Color::Black => TuiColor::Black,
        Color::Red => TuiColor::Red,
        Color::Green => TuiColor::Green,
        Color::Yellow => TuiColor::Yellow,
        Color::Blue => TuiColor::Blue,
        Color::Magenta => TuiColor::Magenta,
        Color::Cyan => TuiColor::Cyan,
        Color::White => TuiColor::White,
        Color::Indexed(n) => TuiColor::Indexed(n),
    }
}

/// Convert display attributes to ratatui modifiers
pub fn modifier(attr: Attr) -> Modifier {
    const MAP: [(Attr, Modifier); 7] = [
        (Attr::BLINK, Modifier::SLOW_BLINK),
        (Attr::BOLD, Modifier::BOLD),
        (Attr::DIM, Modifier::DIM),
        (Attr::REVERSE, Modifier::REVERSED),
        (Attr::STANDOUT, Modifier::REVERSED),
        (Attr::UNDERLINE, Modifier::UNDERLINED),
        (Attr::ITALIC, Modifier::ITALIC),
    ];

    MAP.iter()
        .filter(|(flag, _)| attr.contains(*flag))
        .fold(Modifier::empty(), |acc, (_, m)| acc | *m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::LineInfoRegistry;
    use crate::color_pair::ColorPairs;
    use crate::line_type::LineType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_modifier_mapping() {
        assert_eq!(modifier(Attr::NORMAL), Modifier::empty());
        assert_eq!(
            modifier(Attr::BOLD | Attr::UNDERLINE),
            Modifier::BOLD | Modifier::UNDERLINED
        );
        assert_eq!(modifier(Attr::STANDOUT), Modifier::REVERSED);
    }

    #[test]
    fn test_default_color_maps_to_reset() {
        assert_eq!(tui_color(Color::Default), TuiColor::Reset);
        assert_eq!(tui_color(Color::Indexed(208)), TuiColor::Indexed(208));
    }

    #[test]
    fn test_styles_after_init_colors() {
        let mut registry = LineInfoRegistry::new();
        let mut pairs = ColorPairs::new();
        let mut palette = StylePalette::new();
        pairs.init_colors(&mut registry, &mut palette).unwrap();

        let cursor = registry.info(LineType::Cursor.into()).unwrap();
        assert_eq!(
            palette.style(cursor),
            Style::default()
                .fg(TuiColor::White)
                .bg(TuiColor::Green)
                .add_modifier(Modifier::BOLD)
        );

        let add = registry.info(registry.classify("+line")).unwrap();
        assert_eq!(
            palette.style(add),
            Style::default().fg(TuiColor::Green).bg(TuiColor::Reset)
        );
    }

    #[test]
    fn test_refused_default_colors_fall_back() {
        let mut registry = LineInfoRegistry::new();
        let mut pairs = ColorPairs::new();
        let mut palette = StylePalette {
            no_default_colors: true,
            ..Default::default()
        };
        pairs.init_colors(&mut registry, &mut palette).unwrap();

        let add = registry.info(registry.classify("+line")).unwrap();
        assert_eq!(
            palette.style(add),
            Style::default().fg(TuiColor::Green).bg(TuiColor::Black)
        );
    }

    #[test]
    fn test_out_of_order_pair_is_rejected() {
        let mut palette = StylePalette::new();
        let id = ColorPairId::new(3).unwrap();
        assert!(palette.init_pair(id, Color::Red, Color::Black).is_err());
    }
}
