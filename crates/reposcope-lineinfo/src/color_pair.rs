//! Color-pair allocation
//!
//! Terminals expose a small, flat namespace of color pairs that must each be
//! registered once. Every distinct (foreground, background) combination gets
//! the next free id, starting at 1; line categories sharing a combination
//! share its id.

use std::num::NonZeroUsize;

use reposcope_symbols::SymbolTable;
use serde::Serialize;

use crate::classifier::{LineInfo, LineInfoRegistry};
use crate::color::Color;
use crate::error::LineInfoError;

/// Color pair id as registered with the terminal; never 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ColorPairId(NonZeroUsize);

impl ColorPairId {
    pub fn new(id: usize) -> Option<Self> {
        NonZeroUsize::new(id).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

/// Terminal primitives used by the allocator
pub trait ColorBackend {
    /// Register a color pair under `id`
    fn init_pair(&mut self, id: ColorPairId, fg: Color, bg: Color) -> Result<(), LineInfoError>;

    /// Make `fg`/`bg` the terminal's default colors; may be refused
    fn assume_default_colors(&mut self, fg: Color, bg: Color) -> Result<(), LineInfoError>;
}

/// Cache of allocated color pairs
#[derive(Debug, Clone, Default)]
pub struct ColorPairs {
    pairs: SymbolTable<(Color, Color), ColorPairId>,
}

impl ColorPairs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Id already allocated for a resolved pair
    pub fn get(&self, fg: Color, bg: Color) -> Option<ColorPairId> {
        self.pairs.get(&(fg, bg)).copied()
    }

    /// Allocated pairs as (id, fg, bg), in allocation order
    pub fn iter(&self) -> impl Iterator<Item = (ColorPairId, Color, Color)> + '_ {
        self.pairs.iter().map(|((fg, bg), id)| (*id, *fg, *bg))
    }

    /// Assign a color pair to `info`.
    ///
    /// `Color::Default` in either channel is replaced with `default_fg` or
    /// `default_bg` first. A pair that was seen before reuses its id; a new
    /// one is registered with the backend under the next id.
    pub fn assign_pair(
        &mut self,
        info: &mut LineInfo,
        default_fg: Color,
        default_bg: Color,
        backend: &mut impl ColorBackend,
    ) -> Result<ColorPairId, LineInfoError> {
        let fg = resolve(info.fg, default_fg);
        let bg = resolve(info.bg, default_bg);

        if let Some(id) = self.get(fg, bg) {
            info.color_pair = Some(id);
            return Ok(id);
        }

        let id = ColorPairId::new(self.pairs.len() + 1).ok_or(LineInfoError::OutOfMemory)?;
        // the pair must be cached once the terminal knows it
        self.pairs.try_reserve(1)?;
        backend.init_pair(id, fg, bg)?;
        self.pairs.insert((fg, bg), id)?;

        log::debug!("Allocated color pair {} ({} on {}) for '{}'", id.get(), fg, bg, info.name());
        info.color_pair = Some(id);
        Ok(id)
    }

    /// Allocate pairs for every line category.
    ///
    /// The default category's colors become the terminal defaults, falling
    /// back to white on black if the backend refuses them. Built-in categories
    /// are allocated before custom ones.
    pub fn init_colors(
        &mut self,
        registry: &mut LineInfoRegistry,
        backend: &mut impl ColorBackend,
    ) -> Result<(), LineInfoError> {
        let default_line = registry.default_line();
        let (mut default_fg, mut default_bg) = (default_line.fg, default_line.bg);

        if let Err(err) = backend.assume_default_colors(default_fg, default_bg) {
            log::warn!("Terminal refused default colors, using white on black: {}", err);
            default_fg = Color::White;
            default_bg = Color::Black;
        }

        for info in registry.entries_mut() {
            self.assign_pair(info, default_fg, default_bg, backend)?;
        }

        log::info!("Initialized {} color pairs", self.len());
        Ok(())
    }
}

fn resolve(color: Color, default: Color) -> Color {
    match color {
        Color::Default => default,
        color => color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Attr;
    use crate::line_type::LineType;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingBackend {
        refuse_defaults: bool,
        refuse_pairs: bool,
        defaults: Option<(Color, Color)>,
        pairs: Vec<(usize, Color, Color)>,
    }

    impl ColorBackend for RecordingBackend {
        fn init_pair(&mut self, id: ColorPairId, fg: Color, bg: Color) -> Result<(), LineInfoError> {
            if self.refuse_pairs {
                return Err(LineInfoError::Backend {
                    message: "no more color pairs".to_string(),
                });
            }
            self.pairs.push((id.get(), fg, bg));
            Ok(())
        }

        fn assume_default_colors(&mut self, fg: Color, bg: Color) -> Result<(), LineInfoError> {
            if self.refuse_defaults {
                return Err(LineInfoError::Backend {
                    message: "no default colors".to_string(),
                });
            }
            self.defaults = Some((fg, bg));
            Ok(())
        }
    }

    fn line(registry: &mut LineInfoRegistry, prefix: &str, fg: Color, bg: Color) -> LineInfo {
        let id = registry.add_custom_line(prefix).unwrap();
        let info = registry.info_mut(id).unwrap();
        info.set_colors(fg, bg, Attr::NORMAL);
        info.clone()
    }

    #[test]
    fn test_same_pair_reuses_id() {
        let mut registry = LineInfoRegistry::new();
        let mut pairs = ColorPairs::new();
        let mut backend = RecordingBackend::default();

        let mut a = line(&mut registry, "a", Color::Red, Color::Black);
        let mut b = line(&mut registry, "b", Color::Red, Color::Black);

        let first = pairs
            .assign_pair(&mut a, Color::White, Color::Black, &mut backend)
            .unwrap();
        let second = pairs
            .assign_pair(&mut b, Color::White, Color::Black, &mut backend)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.get(), 1);
        assert_eq!(backend.pairs, vec![(1, Color::Red, Color::Black)]);
        assert_eq!(b.color_pair(), Some(first));
    }

    #[test]
    fn test_new_pair_gets_next_id() {
        let mut registry = LineInfoRegistry::new();
        let mut pairs = ColorPairs::new();
        let mut backend = RecordingBackend::default();

        let mut a = line(&mut registry, "a", Color::Red, Color::Black);
        let mut b = line(&mut registry, "b", Color::Green, Color::Black);

        let first = pairs
            .assign_pair(&mut a, Color::White, Color::Black, &mut backend)
            .unwrap();
        let second = pairs
            .assign_pair(&mut b, Color::White, Color::Black, &mut backend)
            .unwrap();

        assert!(second > first);
        assert_eq!(second.get(), 2);
        assert_eq!(backend.pairs.len(), 2);
    }

    #[test]
    fn test_refused_pair_is_not_cached() {
        let mut registry = LineInfoRegistry::new();
        let mut pairs = ColorPairs::new();
        let mut backend = RecordingBackend {
            refuse_pairs: true,
            ..Default::default()
        };

        let mut a = line(&mut registry, "a", Color::Red, Color::Black);
        assert!(matches!(
            pairs.assign_pair(&mut a, Color::White, Color::Black, &mut backend),
            Err(LineInfoError::Backend { .. })
        ));
        assert!(pairs.is_empty());
        assert_eq!(a.color_pair(), None);

        // the id is handed out again once the backend accepts it
        backend.refuse_pairs = false;
        let id = pairs
            .assign_pair(&mut a, Color::White, Color::Black, &mut backend)
            .unwrap();
        assert_eq!(id.get(), 1);
        assert_eq!(pairs.get(Color::Red, Color::Black), Some(id));
        assert_eq!(backend.pairs, vec![(1, Color::Red, Color::Black)]);
    }

    #[test]
    fn test_default_color_is_substituted_before_dedup() {
        let mut registry = LineInfoRegistry::new();
        let mut pairs = ColorPairs::new();
        let mut backend = RecordingBackend::default();

        let mut implicit = line(&mut registry, "a", Color::Default, Color::Default);
        let mut explicit = line(&mut registry, "b", Color::White, Color::Black);

        let first = pairs
            .assign_pair(&mut implicit, Color::White, Color::Black, &mut backend)
            .unwrap();
        let second = pairs
            .assign_pair(&mut explicit, Color::White, Color::Black, &mut backend)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(backend.pairs, vec![(1, Color::White, Color::Black)]);
    }

    #[test]
    fn test_init_colors_assigns_every_entry() {
        let mut registry = LineInfoRegistry::new();
        let custom = registry.add_custom_line("Fixes:").unwrap();
        registry
            .info_mut(custom)
            .unwrap()
            .set_colors(Color::Indexed(208), Color::Default, Attr::BOLD);

        let mut pairs = ColorPairs::new();
        let mut backend = RecordingBackend::default();
        pairs.init_colors(&mut registry, &mut backend).unwrap();

        assert_eq!(backend.defaults, Some((Color::Default, Color::Default)));
        assert!(registry.defaults().all(|(_, info)| info.color_pair().is_some()));

        // diff-header is allocated first
        let default_line = registry.info(LineType::Default.into()).unwrap();
        let diff_header = registry.info(LineType::DiffHeader.into()).unwrap();
        assert_eq!(diff_header.color_pair().map(ColorPairId::get), Some(1));
        assert_eq!(
            default_line.color_pair(),
            pairs.get(Color::Default, Color::Default)
        );

        // custom entries come last
        let custom_pair = registry.info(custom).unwrap().color_pair().unwrap();
        assert_eq!(custom_pair.get(), pairs.len());
        assert_eq!(backend.pairs.len(), pairs.len());
    }

    #[test]
    fn test_init_colors_falls_back_when_defaults_refused() {
        let mut registry = LineInfoRegistry::new();
        let mut pairs = ColorPairs::new();
        let mut backend = RecordingBackend {
            refuse_defaults: true,
            ..Default::default()
        };

        pairs.init_colors(&mut registry, &mut backend).unwrap();

        let default_line = registry.info(LineType::Default.into()).unwrap();
        assert_eq!(
            default_line.color_pair(),
            pairs.get(Color::White, Color::Black)
        );
        assert_eq!(pairs.get(Color::Default, Color::Default), None);
    }
}
