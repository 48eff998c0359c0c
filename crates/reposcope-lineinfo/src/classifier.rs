//! Line classification
//!
//! Lines are classified by prefix. Custom entries from configuration are
//! checked first, in the order they were added, then the built-in categories
//! in declaration order. Prefix matching ignores case and treats `-`, `_` and
//! `.` as the same character. Entries with an empty prefix never match.

use bitflags::bitflags;
use reposcope_symbols::{enum_equals, enum_starts_with};
use serde::Serialize;

use crate::color::{Attr, Color};
use crate::color_pair::ColorPairId;
use crate::error::LineInfoError;
use crate::line_type::{LineType, default_line_info};

/// Handle to a line-info entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineId {
    Default(LineType),
    /// Index into the custom table
    Custom(usize),
}

impl From<LineType> for LineId {
    fn from(line_type: LineType) -> Self {
        Self::Default(line_type)
    }
}

/// Appearance and match prefix of a line category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    name: String,
    prefix: String,
    pub fg: Color,
    pub bg: Color,
    pub attr: Attr,
    pub(crate) color_pair: Option<ColorPairId>,
}

impl LineInfo {
    fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            fg: Color::Default,
            bg: Color::Default,
            attr: Attr::NORMAL,
            color_pair: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Color pair assigned by [`ColorPairs`](crate::ColorPairs), if any yet
    pub fn color_pair(&self) -> Option<ColorPairId> {
        self.color_pair
    }

    pub fn set_colors(&mut self, fg: Color, bg: Color, attr: Attr) {
        self.fg = fg;
        self.bg = bg;
        self.attr = attr;
    }

    fn matches(&self, line: &str) -> bool {
        !self.prefix.is_empty() && enum_starts_with(line, &self.prefix)
    }
}

bitflags! {
    /// Kinds a reference can have; a ref may carry several
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RefFlags: u8 {
        /// The checked out branch
        const HEAD = 1 << 0;
        /// A tag not yet pushed
        const LOCAL_TAG = 1 << 1;
        const TAG = 1 << 2;
        /// The upstream of the checked out branch
        const TRACKED = 1 << 3;
        const REMOTE = 1 << 4;
        const REPLACE = 1 << 5;
    }
}

/// Built-in and custom line categories
#[derive(Debug, Clone)]
pub struct LineInfoRegistry {
    defaults: Vec<LineInfo>,
    customs: Vec<LineInfo>,
}

impl Default for LineInfoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInfoRegistry {
    pub fn new() -> Self {
        let defaults = default_line_info()
            .into_iter()
            .map(|record| {
                let mut info = LineInfo::new(record.line_type.name(), record.prefix);
                info.set_colors(record.fg, record.bg, record.attr);
                info
            })
            .collect();

        Self {
            defaults,
            customs: Vec::new(),
        }
    }

    /// Classify a line of text
    pub fn classify(&self, line: &str) -> LineId {
        if let Some(index) = self.customs.iter().position(|info| info.matches(line)) {
            return LineId::Custom(index);
        }

        self.defaults
            .iter()
            .position(|info| info.matches(line))
            .and_then(line_type_at)
            .map(LineId::Default)
            .unwrap_or(LineId::Default(LineType::Default))
    }

    /// Category of a reference label, by the first matching kind in the
    /// order head, local tag, tag, tracked, remote, replace
    pub fn classify_from_ref(flags: RefFlags) -> LineType {
        const ORDER: [(RefFlags, LineType); 6] = [
            (RefFlags::HEAD, LineType::MainHead),
            (RefFlags::LOCAL_TAG, LineType::MainLocalTag),
            (RefFlags::TAG, LineType::MainTag),
            (RefFlags::TRACKED, LineType::MainTracked),
            (RefFlags::REMOTE, LineType::MainRemote),
            (RefFlags::REPLACE, LineType::MainReplace),
        ];

        ORDER
            .iter()
            .find(|(flag, _)| flags.contains(*flag))
            .map(|(_, line_type)| *line_type)
            .unwrap_or(LineType::MainRef)
    }

    /// Add a custom entry from a quoted string such as `"\"Fixes:\""`.
    ///
    /// One leading and one trailing character are dropped; the rest is both
    /// the entry's name and its prefix.
    pub fn add_custom_color(&mut self, quoted_line: &str) -> Result<LineId, LineInfoError> {
        let mut chars = quoted_line.chars();
        chars.next();
        chars.next_back();
        self.add_custom_line(chars.as_str())
    }

    /// Add a custom entry matching lines starting with `prefix`
    pub fn add_custom_line(&mut self, prefix: &str) -> Result<LineId, LineInfoError> {
        self.customs
            .try_reserve(1)
            .map_err(|_| LineInfoError::OutOfMemory)?;
        self.customs.push(LineInfo::new(prefix, prefix));

        log::debug!("Added custom line '{}'", prefix);
        Ok(LineId::Custom(self.customs.len() - 1))
    }

    pub fn info(&self, id: LineId) -> Option<&LineInfo> {
        match id {
            LineId::Default(line_type) => self.defaults.get(line_type as usize),
            LineId::Custom(index) => self.customs.get(index),
        }
    }

    pub fn info_mut(&mut self, id: LineId) -> Option<&mut LineInfo> {
        match id {
            LineId::Default(line_type) => self.defaults.get_mut(line_type as usize),
            LineId::Custom(index) => self.customs.get_mut(index),
        }
    }

    /// Built-in category by name (`"diff-header"`, `"DIFF_HEADER"`); custom entries are not searched
    pub fn get_by_name(&self, name: &str) -> Option<&LineInfo> {
        self.position_by_name(name).map(|index| &self.defaults[index])
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut LineInfo> {
        self.position_by_name(name)
            .map(move |index| &mut self.defaults[index])
    }

    /// Like [`get_by_name`](Self::get_by_name), resolving to a handle
    pub fn lookup(&self, name: &str) -> Result<LineId, LineInfoError> {
        self.position_by_name(name)
            .and_then(line_type_at)
            .map(LineId::Default)
            .ok_or_else(|| LineInfoError::UnknownLineName {
                name: name.to_string(),
            })
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.defaults
            .iter()
            .position(|info| enum_equals(&info.name, name))
    }

    /// Built-in entries in declaration order
    pub fn defaults(&self) -> impl Iterator<Item = (LineId, &LineInfo)> {
        self.defaults
            .iter()
            .enumerate()
            .filter_map(|(index, info)| line_type_at(index).map(|t| (LineId::Default(t), info)))
    }

    /// Custom entries in insertion order
    pub fn customs(&self) -> impl Iterator<Item = (LineId, &LineInfo)> {
        self.customs
            .iter()
            .enumerate()
            .map(|(index, info)| (LineId::Custom(index), info))
    }

    pub(crate) fn default_line(&self) -> &LineInfo {
        &self.defaults[LineType::Default as usize]
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut LineInfo> {
        self.defaults.iter_mut().chain(self.customs.iter_mut())
    }
}

fn line_type_at(index: usize) -> Option<LineType> {
    use strum::IntoEnumIterator;
    LineType::iter().nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_diff_lines() {
        let registry = LineInfoRegistry::new();
        assert_eq!(
            registry.classify("diff --git a/src/lib.rs b/src/lib.rs"),
            LineId::Default(LineType::DiffHeader)
        );
        assert_eq!(
            registry.classify("@@ -1,4 +1,5 @@"),
            LineId::Default(LineType::DiffChunk)
        );
        assert_eq!(registry.classify("+added"), LineId::Default(LineType::DiffAdd));
        assert_eq!(registry.classify("-removed"), LineId::Default(LineType::DiffDel));
        assert_eq!(
            registry.classify("commit 0123abcd"),
            LineId::Default(LineType::Commit)
        );
    }

    #[test]
    fn test_classify_signoff_ignores_case_and_separators() {
        let registry = LineInfoRegistry::new();
        let signoff = LineId::Default(LineType::Signoff);

        assert_eq!(registry.classify("    Signed-off-by: A U Thor"), signoff);
        assert_eq!(registry.classify("    signed_off_by: A U Thor"), signoff);
        assert_eq!(registry.classify("    SIGNED.OFF.BY: A U Thor"), signoff);
    }

    #[test]
    fn test_classify_unmatched_is_default() {
        let registry = LineInfoRegistry::new();
        assert_eq!(
            registry.classify("just some text"),
            LineId::Default(LineType::Default)
        );
        assert_eq!(registry.classify(""), LineId::Default(LineType::Default));
    }

    #[test]
    fn test_custom_entries_take_priority() {
        let mut registry = LineInfoRegistry::new();
        let id = registry.add_custom_color("\"commit \"").unwrap();

        assert_eq!(id, LineId::Custom(0));
        assert_eq!(registry.classify("commit 0123abcd"), id);
        assert_eq!(registry.info(id).unwrap().name(), "commit ");
        assert_eq!(registry.info(id).unwrap().prefix(), "commit ");
    }

    #[test]
    fn test_add_custom_color_short_input() {
        let mut registry = LineInfoRegistry::new();

        let empty = registry.add_custom_color("").unwrap();
        let single = registry.add_custom_color("\"").unwrap();
        let quotes = registry.add_custom_color("\"\"").unwrap();

        for id in [empty, single, quotes] {
            assert_eq!(registry.info(id).unwrap().prefix(), "");
        }
        // empty prefixes never match
        assert_eq!(registry.classify("+x"), LineId::Default(LineType::DiffAdd));
    }

    #[test]
    fn test_classify_from_ref_priority() {
        assert_eq!(
            LineInfoRegistry::classify_from_ref(RefFlags::HEAD | RefFlags::REMOTE),
            LineType::MainHead
        );
        assert_eq!(
            LineInfoRegistry::classify_from_ref(RefFlags::TAG | RefFlags::LOCAL_TAG),
            LineType::MainLocalTag
        );
        assert_eq!(
            LineInfoRegistry::classify_from_ref(RefFlags::REMOTE | RefFlags::TRACKED),
            LineType::MainTracked
        );
        assert_eq!(
            LineInfoRegistry::classify_from_ref(RefFlags::REPLACE),
            LineType::MainReplace
        );
        assert_eq!(
            LineInfoRegistry::classify_from_ref(RefFlags::empty()),
            LineType::MainRef
        );
    }

    #[test]
    fn test_get_by_name_searches_defaults_only() {
        let mut registry = LineInfoRegistry::new();
        registry.add_custom_line("Fixes:").unwrap();

        assert_eq!(
            registry.get_by_name("DIFF_HEADER").unwrap().prefix(),
            "diff --"
        );
        assert!(registry.get_by_name("diff.header").is_some());
        assert!(registry.get_by_name("diff-head").is_none());
        assert!(registry.get_by_name("Fixes:").is_none());
        assert_eq!(
            registry.lookup("main-head").unwrap(),
            LineId::Default(LineType::MainHead)
        );
        assert!(matches!(
            registry.lookup("nope"),
            Err(LineInfoError::UnknownLineName { .. })
        ));
    }

    #[test]
    fn test_set_colors() {
        let mut registry = LineInfoRegistry::new();
        let cursor = registry.get_by_name_mut("cursor").unwrap();
        cursor.set_colors(Color::Black, Color::Yellow, Attr::UNDERLINE);

        let info = registry.info(LineType::Cursor.into()).unwrap();
        assert_eq!((info.fg, info.bg, info.attr), (Color::Black, Color::Yellow, Attr::UNDERLINE));
    }
}
