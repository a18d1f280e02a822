//! Application configuration
//!
//! Configuration loaded from config.toml in the app config directory.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Minimum terminal width (columns) for the wide list+detail layout
    #[serde(default = "default_wide_layout_min_width")]
    pub wide_layout_min_width: u16,

    /// Maximum number of persisted search-history entries
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Present the end-of-results condition as an error banner instead of
    /// a sentinel list row. Unset means "follow the active layout": the
    /// wide layout uses the banner, the narrow layout the row.
    #[serde(default)]
    pub end_of_list_as_error: Option<bool>,
}

fn default_wide_layout_min_width() -> u16 {
    110
}

fn default_history_limit() -> usize {
    20
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wide_layout_min_width: default_wide_layout_min_width(),
            history_limit: default_history_limit(),
            end_of_list_as_error: None,
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or use defaults
    pub fn load() -> Self {
        let path = match crate::paths::app_config_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Could not resolve config path: {}", e);
                return Self::default();
            }
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("No config file found, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.wide_layout_min_width, 110);
        assert_eq!(config.history_limit, 20);
        assert!(config.end_of_list_as_error.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            wide_layout_min_width = 140
            end_of_list_as_error = true
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.wide_layout_min_width, 140);
        assert_eq!(config.end_of_list_as_error, Some(true));
        // history_limit should use default
        assert_eq!(config.history_limit, 20);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.wide_layout_min_width, 110);
        assert_eq!(config.history_limit, 20);
    }
}
