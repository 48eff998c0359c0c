use std::path::{Path, PathBuf};

use crate::paths;

/// Load config file content from the first location that has one
///
/// Searches for the config in:
/// 1. `.reposcope.toml` in the current working directory
/// 2. `.reposcope.toml` in the home directory
/// 3. `config.toml` in the platform config directory
///
/// Returns the path and content if found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    paths::config_search_paths()
        .into_iter()
        .find_map(|path| read_config(&path).map(|content| (path, content)))
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(err) => {
            log::trace!("No config at {}: {}", path.display(), err);
            None
        }
    }
}
