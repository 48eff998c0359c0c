use reposcope_keymap::KeymapError;
use reposcope_lineinfo::LineInfoError;
use thiserror::Error;

/// A configuration file or entry that could not be applied
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{entry}: {source}")]
    Keymap {
        entry: String,
        #[source]
        source: KeymapError,
    },

    #[error("{entry}: {source}")]
    LineInfo {
        entry: String,
        #[source]
        source: LineInfoError,
    },

    #[error("{entry}: empty command")]
    EmptyCommand { entry: String },

    #[error("{entry}: needs either 'name' or 'line'")]
    MissingColorTarget { entry: String },
}
