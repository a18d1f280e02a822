//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-repo-search/`
//! - macOS: `~/Library/Application Support/gh-repo-search/`
//! - Windows: `%APPDATA%\gh-repo-search\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gh-repo-search";

/// Get the application config directory, creating it on first use
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get path to the search history file
pub fn search_history_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("search-history.json"))
}

/// Get path to the log file
///
/// The TUI owns the terminal, so log output goes to a file instead.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("gh-repo-search.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_exists() {
        let dir = config_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_file_paths() {
        assert!(app_config_path().unwrap().ends_with("config.toml"));
        assert!(search_history_path()
            .unwrap()
            .ends_with("search-history.json"));
        assert!(log_file_path().unwrap().ends_with("gh-repo-search.log"));
    }
}
