use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme::Theme;

pub fn render(query: &str, theme: &Theme, frame: &mut Frame<'_>, area: Rect) {
    let content = if query.is_empty() {
        Line::from(Span::styled(
            "type to filter, Esc clears, Ctrl-R refreshes, Ctrl-C quits",
            theme.muted,
        ))
    } else {
        Line::from(Span::styled(query.to_owned(), theme.highlight))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border)
        .title(Span::styled(" Search ", theme.panel_title));
    frame.render_widget(Paragraph::new(content).block(block), area);
}
