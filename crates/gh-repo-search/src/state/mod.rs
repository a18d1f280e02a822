//! Application state
//!
//! All state is owned by the main thread and mutated exclusively through
//! reducers; the background worker reads cloned snapshots.

pub mod app;
pub mod history;
pub mod input;
pub mod search;

pub use app::{AppState, LayoutState};
pub use history::HistoryState;
pub use input::InputState;
pub use search::{PageSlice, SearchState};
