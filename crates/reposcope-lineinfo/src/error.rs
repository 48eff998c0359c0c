use reposcope_symbols::SymbolError;
use thiserror::Error;

/// Errors raised by color parsing, line-info lookups and color-pair allocation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineInfoError {
    #[error("Unknown color: '{name}'")]
    UnknownColor { name: String },

    #[error("Unknown attribute: '{name}'")]
    UnknownAttribute { name: String },

    /// No built-in line category has this name
    #[error("Unknown color name: '{name}'")]
    UnknownLineName { name: String },

    #[error("Out of memory")]
    OutOfMemory,

    /// The terminal backend refused a request
    #[error("Color backend error: {message}")]
    Backend { message: String },
}

impl From<SymbolError> for LineInfoError {
    fn from(err: SymbolError) -> Self {
        match err {
            SymbolError::OutOfMemory => Self::OutOfMemory,
        }
    }
}
