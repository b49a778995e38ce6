use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::CommunityState;
use crate::theme::Theme;

/// At most this many community entries are previewed.
const PREVIEW_LIMIT: usize = 8;

pub fn render(state: &CommunityState, theme: &Theme, frame: &mut Frame<'_>, area: Rect) {
    let (title, lines) = match state {
        CommunityState::Loading => (
            " Community ".to_owned(),
            vec![Line::from(Span::styled("loading...", theme.muted))],
        ),
        CommunityState::Unavailable => (
            " Community ".to_owned(),
            vec![Line::from(Span::styled(
                "No community skills preview available yet.",
                theme.muted,
            ))],
        ),
        CommunityState::Loaded(preview) => {
            let mut lines: Vec<Line<'_>> = preview
                .items
                .iter()
                .take(PREVIEW_LIMIT)
                .map(|item| {
                    let mut spans = vec![Span::styled(
                        item.display_name().to_owned(),
                        theme.panel_title,
                    )];
                    if let Some(desc) = &item.description {
                        spans.push(Span::raw(format!(" - {desc}")));
                    }
                    if let Some(url) = &item.url {
                        spans.push(Span::raw(" "));
                        spans.push(Span::styled(url.clone(), theme.link));
                    }
                    Line::from(spans)
                })
                .collect();
            if lines.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No community skills preview available yet.",
                    theme.muted,
                )));
            }
            (format!(" Community ({}) ", preview.source), lines)
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border)
        .title(Span::styled(title, theme.panel_title));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
