//! Search bar view
//!
//! A bordered input field with submit-on-enter semantics and a floating
//! history dropdown while focused.

use crate::state::AppState;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

/// Render the search input field
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let border_style = if state.input.focused {
        theme.accent()
    } else {
        theme.panel_border()
    };

    let block = Block::default()
        .title(" Search GitHub repositories ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .title_style(theme.panel_title());

    let content = if state.input.value.is_empty() && !state.input.focused {
        Line::from(Span::styled("Press / to search", theme.text_muted()))
    } else {
        let mut spans = vec![Span::styled(state.input.value.clone(), theme.text_primary())];
        if state.input.focused {
            spans.push(Span::styled("█", theme.accent()));
        }
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(content).block(block), area);
}

/// Render the history dropdown under the search bar
pub fn render_history(state: &AppState, content_area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let entries = &state.history.queries;

    let height = (entries.len().min(8) as u16) + 2;
    let width = content_area.width.min(60);
    let popup = Rect {
        x: content_area.x,
        y: content_area.y,
        width,
        height: height.min(content_area.height),
    };

    let items: Vec<ListItem> = entries
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, query)| {
            let style = if state.input.history_cursor == Some(i) {
                theme.selection()
            } else {
                theme.text_secondary()
            };
            ListItem::new(Line::from(vec![
                Span::styled("⟲ ", theme.text_muted()),
                Span::styled(query.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Recent searches ")
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title_style(theme.text_muted()),
    );

    f.render_widget(Clear, popup);
    f.render_widget(list, popup);
}
