use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::StatusLine;
use crate::theme::Theme;

pub fn render(
    status: Option<&StatusLine>,
    theme: &Theme,
    frame: &mut Frame<'_>,
    area: Rect,
) {
    let line = match status {
        Some(status) if status.is_error => {
            Line::from(Span::styled(format!(" {} ", status.text), theme.error))
        }
        Some(status) => Line::from(format!(" {} ", status.text)),
        None => Line::from(Span::styled(" ready ", theme.muted)),
    };
    frame.render_widget(Paragraph::new(line).style(theme.status_bar), area);
}
