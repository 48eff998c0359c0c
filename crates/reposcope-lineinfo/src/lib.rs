//! Line categories and colors for reposcope
//!
//! Lines of text are classified into categories by prefix (`LineInfoRegistry`),
//! each category's colors are folded into a deduplicated set of terminal color
//! pairs (`ColorPairs`), and `StylePalette` turns those pairs into ratatui
//! styles.
//!
//! ```
//! use reposcope_lineinfo::{ColorPairs, LineInfoRegistry, LineType, StylePalette};
//!
//! let mut registry = LineInfoRegistry::new();
//! let mut pairs = ColorPairs::new();
//! let mut palette = StylePalette::new();
//! pairs.init_colors(&mut registry, &mut palette).unwrap();
//!
//! let id = registry.classify("@@ -1 +1 @@");
//! assert_eq!(id, LineType::DiffChunk.into());
//! ```

mod classifier;
mod color;
mod color_pair;
mod error;
mod line_type;
mod palette;

pub use classifier::{LineId, LineInfo, LineInfoRegistry, RefFlags};
pub use color::{Attr, Color};
pub use color_pair::{ColorBackend, ColorPairId, ColorPairs};
pub use error::LineInfoError;
pub use line_type::{LineDefault, LineType, default_line_info};
pub use palette::{StylePalette, modifier, tui_color};
