use reposcope_symbols::SymbolError;
use thiserror::Error;

/// Errors raised by keymap, key name and run-request operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeymapError {
    /// The key name is neither catalogued nor a `^X`, `^[X` or single character sequence
    #[error("Unknown key: '{name}'")]
    UnknownKey { name: String },

    /// No keymap is registered under this name
    #[error("Unknown key map: '{name}'")]
    UnknownKeymap { name: String },

    /// The name matches no built-in request
    #[error("Unknown request name: '{name}'")]
    UnknownRequest { name: String },

    /// A key legend outgrew its buffer
    #[error("Too many keybindings!")]
    TooManyKeybindings,

    /// Growing a binding or run-request table failed
    #[error("Out of memory")]
    OutOfMemory,
}

impl From<SymbolError> for KeymapError {
    fn from(err: SymbolError) -> Self {
        match err {
            SymbolError::OutOfMemory => Self::OutOfMemory,
        }
    }
}
