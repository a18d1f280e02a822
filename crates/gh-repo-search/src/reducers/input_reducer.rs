//! Input field reducer

use crate::actions::InputAction;
use crate::state::{HistoryState, InputState};

/// Reduce input field state
///
/// History cycling reads the (newest-first) history list: `HistoryPrev`
/// walks towards older entries, `HistoryNext` back towards the draft the
/// user was typing.
pub fn reduce_input(
    mut state: InputState,
    history: &HistoryState,
    action: &InputAction,
) -> InputState {
    match action {
        InputAction::Focus => {
            state.focused = true;
            state.history_cursor = None;
        }

        InputAction::Blur => {
            state.focused = false;
            state.history_cursor = None;
        }

        InputAction::Char(c) => {
            state.value.push(*c);
            state.history_cursor = None;
        }

        InputAction::Backspace => {
            state.value.pop();
            state.history_cursor = None;
        }

        InputAction::ClearLine => {
            state.value.clear();
            state.history_cursor = None;
        }

        InputAction::HistoryPrev => {
            if history.queries.is_empty() {
                return state;
            }
            let next = match state.history_cursor {
                None => {
                    state.draft = state.value.clone();
                    0
                }
                Some(cursor) => (cursor + 1).min(history.queries.len() - 1),
            };
            state.history_cursor = Some(next);
            state.value = history.queries[next].clone();
        }

        InputAction::HistoryNext => match state.history_cursor {
            None => {}
            Some(0) => {
                state.value = state.draft.clone();
                state.history_cursor = None;
            }
            Some(cursor) => {
                state.history_cursor = Some(cursor - 1);
                state.value = history.queries[cursor - 1].clone();
            }
        },
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> HistoryState {
        HistoryState {
            queries: vec!["newest".to_string(), "older".to_string()],
        }
    }

    #[test]
    fn test_typing() {
        let mut state = reduce_input(InputState::default(), &history(), &InputAction::Focus);
        assert!(state.focused);

        for c in "rg".chars() {
            state = reduce_input(state, &history(), &InputAction::Char(c));
        }
        assert_eq!(state.value, "rg");

        state = reduce_input(state, &history(), &InputAction::Backspace);
        assert_eq!(state.value, "r");

        state = reduce_input(state, &history(), &InputAction::ClearLine);
        assert!(state.value.is_empty());
    }

    #[test]
    fn test_history_cycling_and_draft_restore() {
        let mut state = InputState {
            value: "dra".to_string(),
            focused: true,
            ..InputState::default()
        };

        state = reduce_input(state, &history(), &InputAction::HistoryPrev);
        assert_eq!(state.value, "newest");

        state = reduce_input(state, &history(), &InputAction::HistoryPrev);
        assert_eq!(state.value, "older");

        // Already at the oldest entry: stays put.
        state = reduce_input(state, &history(), &InputAction::HistoryPrev);
        assert_eq!(state.value, "older");

        state = reduce_input(state, &history(), &InputAction::HistoryNext);
        assert_eq!(state.value, "newest");

        state = reduce_input(state, &history(), &InputAction::HistoryNext);
        assert_eq!(state.value, "dra");
        assert_eq!(state.history_cursor, None);
    }

    #[test]
    fn test_history_prev_with_empty_history() {
        let state = reduce_input(
            InputState::default(),
            &HistoryState::default(),
            &InputAction::HistoryPrev,
        );
        assert!(state.value.is_empty());
        assert_eq!(state.history_cursor, None);
    }

    #[test]
    fn test_typing_cancels_history_cycling() {
        let mut state = InputState {
            focused: true,
            ..InputState::default()
        };
        state = reduce_input(state, &history(), &InputAction::HistoryPrev);
        assert!(state.history_cursor.is_some());

        state = reduce_input(state, &history(), &InputAction::Char('x'));
        assert_eq!(state.history_cursor, None);
        assert_eq!(state.value, "newestx");
    }
}
