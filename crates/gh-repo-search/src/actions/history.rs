//! Search history actions

/// Actions for the persisted search history
#[derive(Debug, Clone)]
pub enum HistoryAction {
    /// History entries loaded or updated from disk (newest first)
    Loaded(Vec<String>),
}
