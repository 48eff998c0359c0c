//! Keybindings and line colors loaded from configuration

use std::path::Path;

use anyhow::Result;
use reposcope_config::{AppConfig, ConfigError};
use reposcope_keymap::Bindings;
use reposcope_lineinfo::LineInfoRegistry;

/// Everything the commands need, built once at startup
#[derive(Debug)]
pub struct Context {
    pub bindings: Bindings,
    pub lines: LineInfoRegistry,
    /// Configuration entries that could not be applied
    pub config_errors: Vec<ConfigError>,
}

impl Context {
    /// Load the configuration from `path`, or search the default locations
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => AppConfig::load_from_path(path)?,
            None => AppConfig::load(),
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut bindings = Bindings::with_views()?;
        let mut lines = LineInfoRegistry::new();
        let config_errors = reposcope_config::apply(config, &mut bindings, &mut lines);

        Ok(Self {
            bindings,
            lines,
            config_errors,
        })
    }
}
