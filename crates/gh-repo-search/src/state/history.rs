//! Search history state

/// Recently submitted queries, newest first
#[derive(Debug, Clone, Default)]
pub struct HistoryState {
    pub queries: Vec<String>,
}
