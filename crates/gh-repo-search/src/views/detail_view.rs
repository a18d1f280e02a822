//! Detail pane view
//!
//! Shown in the wide layout next to the list: the selected repository's
//! full metadata.

use crate::state::AppState;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Render the detail pane for the selected repository
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let block = Block::default()
        .title(" Repository ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    let Some(repo) = state.search.selected_repository() else {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Nothing selected", theme.text_muted())),
        ])
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    if let Some(message) = &repo.end_of_list_message {
        let mut lines = vec![Line::from("")];
        lines.extend(
            message
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), theme.warning()))),
        );
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            repo.repository_name.clone(),
            theme.panel_title(),
        )),
        Line::from(vec![
            Span::styled("by ", theme.text_muted()),
            Span::styled(repo.owner_name.clone(), theme.text_secondary()),
        ]),
        Line::from(""),
    ];

    if !repo.repository_desc.is_empty() {
        lines.push(Line::from(Span::styled(
            repo.repository_desc.clone(),
            theme.text_primary(),
        )));
        lines.push(Line::from(""));
    }

    if let Some(language) = &repo.language {
        lines.push(field("Language", language, state));
    }
    if let Some(license) = &repo.license_type {
        lines.push(field("License", license, state));
    }
    if let Some(topics) = &repo.topics {
        lines.push(field("Topics", topics, state));
    }
    lines.push(field("URL", &repo.repository_url, state));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("o", theme.key_hint()),
        Span::styled(" open in browser", theme.key_description()),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn field<'a>(name: &'a str, value: &str, state: &AppState) -> Line<'a> {
    let theme = &state.theme;
    Line::from(vec![
        Span::styled(format!("{:<10}", name), theme.text_muted()),
        Span::styled(value.to_string(), theme.text_secondary()),
    ])
}
