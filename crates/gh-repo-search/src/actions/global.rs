//! Global application actions

/// Actions that affect the whole application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Startup work: load config-backed data (search history)
    Bootstrap,
    /// Shut the application down
    Quit,
    /// Periodic timer: drives the spinner and transient-error expiry
    Tick,
    /// Terminal was resized (columns, rows)
    Resize(u16, u16),
}
