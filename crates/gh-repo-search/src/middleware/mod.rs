use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod history_middleware;
pub mod keyboard_middleware;
pub mod search_middleware;

pub use history_middleware::HistoryMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use search_middleware::SearchMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread, so it can perform blocking
/// operations (API calls, file IO) without affecting the render loop.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the
    /// action.
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
