//! Search history management
//!
//! Handles loading and saving recently submitted search queries.

use crate::paths::search_history_path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

/// A recently submitted search query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEntry {
    /// The query text as the user typed it
    pub query: String,
    /// When the query was last submitted
    pub searched_at: DateTime<Utc>,
}

impl SearchEntry {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            searched_at: Utc::now(),
        }
    }
}

/// Load the search history from the config file
///
/// Returns an empty vector if the file doesn't exist or can't be parsed.
pub fn load_search_history() -> Vec<SearchEntry> {
    let path = match search_history_path() {
        Ok(path) => path,
        Err(e) => {
            log::warn!("Could not resolve search history path: {}", e);
            return Vec::new();
        }
    };

    match File::open(&path) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(entries) => {
                    log::info!("Loaded search history from {:?}", path);
                    entries
                }
                Err(e) => {
                    log::warn!("Failed to parse search history file: {}", e);
                    Vec::new()
                }
            }
        }
        Err(_) => {
            log::debug!("No search history file found, starting fresh");
            Vec::new()
        }
    }
}

/// Save the search history to the config file
///
/// Returns an error if the file cannot be created or written.
pub fn save_search_history(entries: &[SearchEntry]) -> anyhow::Result<()> {
    let path = search_history_path()?;
    let file = File::create(&path)?;
    serde_json::to_writer_pretty(file, entries)?;
    log::info!("Saved {} search history entries", entries.len());
    Ok(())
}

/// Record a query at the front of the history
///
/// An existing entry with the same query (case-insensitive) moves to the
/// front with a fresh timestamp; the list is capped at `limit`.
pub fn push_search(entries: &mut Vec<SearchEntry>, query: &str, limit: usize) {
    let query = query.trim();
    if query.is_empty() {
        return;
    }

    entries.retain(|e| !e.query.eq_ignore_ascii_case(query));
    entries.insert(0, SearchEntry::new(query));
    entries.truncate(limit);
}
