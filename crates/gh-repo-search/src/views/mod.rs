//! Views - pure rendering from state
//!
//! One function per panel. The results area adapts to the terminal
//! width: narrow terminals get a full-width list, wide terminals a
//! list+detail split.

use crate::state::AppState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

pub mod detail_view;
pub mod results_view;
pub mod search_bar;
pub mod status_bar;

/// Render the whole application
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Search bar
        Constraint::Min(0),    // Results
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    search_bar::render(state, chunks[0], f);

    if state.layout.is_wide() {
        let halves =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(chunks[1]);
        results_view::render(state, halves[0], f);
        detail_view::render(state, halves[1], f);
    } else {
        results_view::render(state, chunks[1], f);
    }

    status_bar::render(state, chunks[2], f);

    // History suggestions float over the results while the input has
    // focus.
    if state.input.focused && !state.history.queries.is_empty() {
        search_bar::render_history(state, chunks[1], f);
    }
}
