//! Configuration and file management for gh-repo-search
//!
//! This crate provides:
//! - File path utilities for config, history and log files
//! - Application configuration (TOML)
//! - Search-history persistence (JSON)

pub mod app_config;
pub mod paths;
pub mod search_history;

pub use app_config::AppConfig;
pub use search_history::{
    load_search_history, push_search, save_search_history, SearchEntry,
};
