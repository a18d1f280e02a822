//! Root reducer
//!
//! Orchestrates the per-domain reducers and handles global actions.

use crate::actions::{Action, GlobalAction, HistoryAction};
use crate::reducers::{input_reducer, search_reducer};
use crate::state::AppState;

/// Produce the next state from the current state and one action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }

        Action::Global(GlobalAction::Tick) => {
            state.tick = state.tick.wrapping_add(1);
            state.search = search_reducer::expire_stale_error(state.search);
        }

        Action::Global(GlobalAction::Resize(width, height)) => {
            state.layout.width = *width;
            state.layout.height = *height;
        }

        Action::Global(GlobalAction::Bootstrap) => {}

        Action::Input(input_action) => {
            state.input = input_reducer::reduce_input(state.input, &state.history, input_action);
        }

        Action::Search(search_action) => {
            state.search = search_reducer::reduce_search(state.search, search_action);
        }

        Action::History(HistoryAction::Loaded(queries)) => {
            state.history.queries = queries.clone();
            // The list shifted under any in-progress cycling.
            state.input.history_cursor = None;
        }

        // Raw keys are consumed by the keyboard middleware; one leaking
        // through means no middleware claimed it.
        Action::Key(_) => {}
    }

    state
}
