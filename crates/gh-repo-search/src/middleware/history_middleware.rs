//! Search history middleware
//!
//! Loads the persisted history on bootstrap and records every submitted
//! query. File IO failures degrade to an empty or unsaved history with a
//! log line; they never surface to the user.

use crate::actions::{Action, GlobalAction, HistoryAction, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_search_config::{load_search_history, push_search, save_search_history, SearchEntry};

pub struct HistoryMiddleware {
    entries: Vec<SearchEntry>,
    limit: usize,
}

impl HistoryMiddleware {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    fn queries(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.query.clone()).collect()
    }
}

impl Middleware for HistoryMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::Bootstrap) => {
                self.entries = load_search_history();
                dispatcher.dispatch(Action::History(HistoryAction::Loaded(self.queries())));
                true
            }

            Action::Search(SearchAction::Submit(query)) => {
                if !query.trim().is_empty() {
                    push_search(&mut self.entries, query, self.limit);
                    if let Err(e) = save_search_history(&self.entries) {
                        log::warn!("Failed to save search history: {}", e);
                    }
                    dispatcher.dispatch(Action::History(HistoryAction::Loaded(self.queries())));
                }
                // The search middleware still needs to see the submit.
                true
            }

            _ => true,
        }
    }
}
