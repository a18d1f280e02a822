//! Search input field actions

/// Actions for the search input field
#[derive(Debug, Clone)]
pub enum InputAction {
    /// Give the input field keyboard focus
    Focus,
    /// Drop keyboard focus
    Blur,
    /// Character typed into the field
    Char(char),
    /// Backspace pressed
    Backspace,
    /// Clear the entire field (Ctrl+Backspace)
    ClearLine,
    /// Recall the next-older history entry into the field
    HistoryPrev,
    /// Recall the next-newer history entry, or restore the draft
    HistoryNext,
}
