//! Status bar view
//!
//! One line at the bottom: the transient error banner wins, then the
//! loading spinner, then result counts, then key hints.

use crate::state::AppState;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the status bar
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let search = &state.search;

    let line = if let Some(message) = &search.error_message {
        // Banner shows the first line; the log has the full text.
        let first_line = message.lines().next().unwrap_or(message.as_str());
        Line::from(Span::styled(format!(" ✗ {}", first_line), theme.error()))
    } else if search.is_loading {
        let frame = SPINNER_FRAMES[state.tick % SPINNER_FRAMES.len()];
        Line::from(Span::styled(
            format!(" {} Loading…", frame),
            theme.text_secondary(),
        ))
    } else if !search.items.is_empty() {
        let more = if search.next_key.is_some() {
            " · scroll for more"
        } else {
            " · end of results"
        };
        Line::from(vec![
            Span::styled(
                format!(" {} repositories loaded", search.items.len()),
                theme.success(),
            ),
            Span::styled(more, theme.text_muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" /", theme.key_hint()),
            Span::styled(" search  ", theme.key_description()),
            Span::styled("j/k", theme.key_hint()),
            Span::styled(" move  ", theme.key_description()),
            Span::styled("r", theme.key_hint()),
            Span::styled(" refresh  ", theme.key_description()),
            Span::styled("o", theme.key_hint()),
            Span::styled(" open  ", theme.key_description()),
            Span::styled("q", theme.key_hint()),
            Span::styled(" quit", theme.key_description()),
        ])
    };

    f.render_widget(Paragraph::new(line), area);
}
