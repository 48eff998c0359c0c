//! Configuration for reposcope
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Applying a configuration to keybindings, run-requests and line colors

pub mod app_config;
pub mod apply;
pub mod config_file;
pub mod error;
pub mod paths;

pub use app_config::{AppConfig, BindEntry, ColorEntry, RunEntry};
pub use apply::apply;
pub use config_file::load_config_file;
pub use error::ConfigError;
