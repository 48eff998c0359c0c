//! Application configuration
//!
//! Configuration loaded from `.reposcope.toml`:
//!
//! ```toml
//! builtin_run_requests = true
//! hidden_keymaps = ["stage"]
//!
//! [[bind]]
//! keymap = "generic"
//! key = "q"
//! action = "none"
//!
//! [[run]]
//! keymap = "main"
//! key = "F"
//! command = ["git", "fetch"]
//! confirm = true
//!
//! [[color]]
//! name = "cursor"
//! fg = "black"
//! bg = "yellow"
//! attributes = ["bold"]
//!
//! [[color]]
//! line = "    Fixes:"
//! fg = "cyan"
//! bg = "default"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A `[[bind]]` entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BindEntry {
    pub keymap: String,
    pub key: String,
    pub action: String,
}

/// A `[[run]]` entry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RunEntry {
    pub keymap: String,
    pub key: String,
    pub command: Vec<String>,
    #[serde(default)]
    pub force: bool,
    #[serde(default)]
    pub silent: bool,
    #[serde(default)]
    pub confirm: bool,
    #[serde(default)]
    pub exit: bool,
    #[serde(default)]
    pub internal: bool,
}

/// A `[[color]]` entry, targeting a built-in category by `name` or adding a
/// custom `line` prefix
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: Option<String>,
    pub line: Option<String>,
    pub fg: String,
    pub bg: String,
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Install the built-in git run-requests, below the configured ones
    #[serde(default = "default_builtin_run_requests")]
    pub builtin_run_requests: bool,

    /// Keymaps left out of `reposcope keys`
    #[serde(default)]
    pub hidden_keymaps: Vec<String>,

    #[serde(default)]
    pub bind: Vec<BindEntry>,

    #[serde(default)]
    pub run: Vec<RunEntry>,

    #[serde(default)]
    pub color: Vec<ColorEntry>,
}

fn default_builtin_run_requests() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            builtin_run_requests: default_builtin_run_requests(),
            hidden_keymaps: Vec::new(),
            bind: Vec::new(),
            run: Vec::new(),
            color: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        if let Some((path, content)) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", path.display(), e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to load {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.builtin_run_requests);
        assert!(config.hidden_keymaps.is_empty());
        assert!(config.bind.is_empty());
        assert!(config.run.is_empty());
        assert!(config.color.is_empty());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            builtin_run_requests = false
            hidden_keymaps = ["stage", "help"]

            [[bind]]
            keymap = "generic"
            key = "q"
            action = "none"

            [[run]]
            keymap = "main"
            key = "F"
            command = ["git", "fetch"]
            confirm = true
        "#;
        let config = AppConfig::from_toml(toml).unwrap();

        assert!(!config.builtin_run_requests);
        assert_eq!(config.hidden_keymaps, vec!["stage", "help"]);
        assert_eq!(
            config.bind,
            vec![BindEntry {
                keymap: "generic".to_string(),
                key: "q".to_string(),
                action: "none".to_string(),
            }]
        );
        assert_eq!(config.run[0].command, vec!["git", "fetch"]);
        assert!(config.run[0].confirm);
        // flags default to off
        assert!(!config.run[0].force);
        assert!(!config.run[0].silent);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            [[color]]
            line = "    Fixes:"
            fg = "cyan"
            bg = "default"
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert!(config.builtin_run_requests);
        assert_eq!(config.color[0].name, None);
        assert_eq!(config.color[0].line.as_deref(), Some("    Fixes:"));
        assert!(config.color[0].attributes.is_empty());
    }

    #[test]
    fn test_config_parse_error() {
        let result = AppConfig::from_toml("[[bind]]\nkeymap = 1");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
