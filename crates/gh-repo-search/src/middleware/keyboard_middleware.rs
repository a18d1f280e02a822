//! Keyboard middleware
//!
//! Translates raw key events into semantic actions. The mapping depends
//! on whether the search input has focus: a focused input swallows most
//! keys as text, an unfocused one exposes list navigation.

use crate::actions::{Action, GlobalAction, InputAction, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_focused(&self, key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        match key.code {
            KeyCode::Enter => {
                dispatcher.dispatch(Action::Input(InputAction::Blur));
                dispatcher.dispatch(Action::Search(SearchAction::Submit(
                    state.input.value.clone(),
                )));
            }
            KeyCode::Esc => dispatcher.dispatch(Action::Input(InputAction::Blur)),
            KeyCode::Backspace if key.modifiers.contains(KeyModifiers::CONTROL) => {
                dispatcher.dispatch(Action::Input(InputAction::ClearLine));
            }
            KeyCode::Backspace => dispatcher.dispatch(Action::Input(InputAction::Backspace)),
            KeyCode::Up => dispatcher.dispatch(Action::Input(InputAction::HistoryPrev)),
            KeyCode::Down => dispatcher.dispatch(Action::Input(InputAction::HistoryNext)),
            KeyCode::Char(c) => dispatcher.dispatch(Action::Input(InputAction::Char(c))),
            _ => {}
        }
    }

    fn handle_unfocused(&self, key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        match key.code {
            KeyCode::Char('q') => dispatcher.dispatch(Action::Global(GlobalAction::Quit)),
            KeyCode::Esc => {
                // Esc acknowledges a visible error before it quits anything.
                if state.search.error_message.is_some() {
                    dispatcher.dispatch(Action::Search(SearchAction::ErrorShown));
                } else {
                    dispatcher.dispatch(Action::Global(GlobalAction::Quit));
                }
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                dispatcher.dispatch(Action::Input(InputAction::Focus));
            }
            KeyCode::Char('j') | KeyCode::Down => {
                dispatcher.dispatch(Action::Search(SearchAction::NavigateNext));
            }
            KeyCode::Char('k') | KeyCode::Up => {
                dispatcher.dispatch(Action::Search(SearchAction::NavigatePrevious));
            }
            KeyCode::Char('g') => dispatcher.dispatch(Action::Search(SearchAction::NavigateToTop)),
            KeyCode::Char('G') => {
                dispatcher.dispatch(Action::Search(SearchAction::NavigateToBottom));
            }
            KeyCode::Char('r') => dispatcher.dispatch(Action::Search(SearchAction::Refresh)),
            KeyCode::Char('o') | KeyCode::Enter => {
                dispatcher.dispatch(Action::Search(SearchAction::OpenInBrowser));
            }
            _ => {}
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Key(key) = action else {
            return true;
        };

        // Ctrl+C always quits, focus or not.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        if state.input.focused {
            self.handle_focused(key, state, dispatcher);
        } else {
            self.handle_unfocused(key, state, dispatcher);
        }

        false // Raw keys never reach the reducer
    }
}
