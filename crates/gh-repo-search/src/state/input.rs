//! Search input field state

/// State of the search input field
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current field contents
    pub value: String,
    /// Whether the field has keyboard focus
    pub focused: bool,
    /// Index into the history list while cycling through it
    pub history_cursor: Option<usize>,
    /// The in-progress text saved when history cycling started
    pub draft: String,
}
