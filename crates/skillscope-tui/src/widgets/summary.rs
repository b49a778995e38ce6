use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use skillscope_report::Report;

use crate::theme::Theme;

pub fn render(report: &Report, shown: usize, theme: &Theme, frame: &mut Frame<'_>, area: Rect) {
    let line = Line::from(format!(
        " Skills: {} ({shown} shown) | Generated: {} | Avg overall {} / quality {} / security {} ",
        report.count,
        report.generated_at,
        report.summary.avg_overall,
        report.summary.avg_quality,
        report.summary.avg_security,
    ));
    frame.render_widget(Paragraph::new(line).style(theme.header), area);
}
