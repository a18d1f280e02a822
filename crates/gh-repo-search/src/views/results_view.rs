//! Result list view
//!
//! Renders the flattened pages as a scrollable list. Sentinel rows (the
//! end-of-results marker) and the empty/loading states render as
//! centered notices.

use crate::domain::Repository;
use crate::state::AppState;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

/// Render the result list
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let search = &state.search;

    let title = if search.query.is_empty() {
        " Results ".to_string()
    } else {
        format!(" Results · {} ", search.query)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    if search.items.is_empty() {
        let notice = if let Some(message) = &search.empty_list_message {
            Line::from(Span::styled(message.clone(), theme.warning()))
        } else if search.is_loading {
            Line::from(Span::styled("Loading…", theme.text_secondary()))
        } else {
            Line::from(vec![
                Span::styled("Press ", theme.text_muted()),
                Span::styled("/", theme.key_hint()),
                Span::styled(" and search for repositories", theme.text_muted()),
            ])
        };

        let paragraph = Paragraph::new(vec![Line::from(""), notice])
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = search
        .items
        .iter()
        .map(|repo| list_item(repo, state))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selection());

    let mut list_state = ListState::default().with_selected(Some(search.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn list_item<'a>(repo: &'a Repository, state: &AppState) -> ListItem<'a> {
    let theme = &state.theme;

    if let Some(message) = &repo.end_of_list_message {
        // Only the first line of the upstream message fits a list row.
        let first_line = message.lines().next().unwrap_or("End of results");
        return ListItem::new(Line::from(Span::styled(
            format!("— {} —", first_line),
            theme.warning(),
        )));
    }

    let mut title = vec![Span::styled(repo.repository_name.clone(), theme.accent())];
    if let Some(language) = &repo.language {
        title.push(Span::styled(format!("  [{}]", language), theme.text_muted()));
    }

    let desc = truncated(&repo.repository_desc, 120);
    ListItem::new(vec![
        Line::from(title),
        Line::from(Span::styled(format!("  {}", desc), theme.text_muted())),
    ])
}

fn truncated(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_keeps_short_text() {
        assert_eq!(truncated("short", 10), "short");
    }

    #[test]
    fn test_truncated_cuts_on_char_boundary() {
        let text = "äöü".repeat(50);
        let cut = truncated(&text, 10);
        assert!(cut.ends_with('…'));
        assert_eq!(cut.chars().count(), 11);
    }
}
