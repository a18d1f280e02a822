//! Actions module
//!
//! All state changes flow through actions, organized by domain:
//! - `Key` wraps raw terminal input and is translated by the keyboard
//!   middleware into semantic actions
//! - `Global` actions affect the whole application
//! - `Input`, `Search` and `History` actions target one domain's reducer

pub mod global;
pub mod history;
pub mod input;
pub mod search;

pub use global::GlobalAction;
pub use history::HistoryAction;
pub use input::InputAction;
pub use search::SearchAction;

use ratatui::crossterm::event::KeyEvent;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Raw key press, consumed by the keyboard middleware
    Key(KeyEvent),
    /// Application-wide actions
    Global(GlobalAction),
    /// Search input field actions
    Input(InputAction),
    /// Search/result-list actions
    Search(SearchAction),
    /// Search history actions
    History(HistoryAction),
}
