//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/reposcope/`, `~/.cache/reposcope/`
//! - macOS: `~/Library/Application Support/reposcope/`, `~/Library/Caches/reposcope/`
//! - Windows: `%APPDATA%\reposcope\`, `%LOCALAPPDATA%\reposcope\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_NAME: &str = "reposcope";
pub const CONFIG_FILE: &str = ".reposcope.toml";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Path of the config file in the working directory
pub fn local_config_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(CONFIG_FILE))
}

/// Path of the config file in the home directory
pub fn home_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(CONFIG_FILE))
}

/// Path of the config file in the platform config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Candidate config files, in search order
pub fn config_search_paths() -> Vec<PathBuf> {
    [local_config_path(), home_config_path(), app_config_path()]
        .into_iter()
        .filter_map(|path| path.ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_config_paths() {
        let local = local_config_path().unwrap();
        assert!(local.ends_with(CONFIG_FILE));

        let global = app_config_path().unwrap();
        assert!(global.ends_with("reposcope/config.toml"));
    }

    #[test]
    fn test_search_order_starts_in_working_directory() {
        let paths = config_search_paths();
        assert_eq!(paths.first(), local_config_path().ok().as_ref());
    }
}
