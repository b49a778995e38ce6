use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use skillscope_report::SkillReport;

use crate::theme::Theme;

/// Findings and gaps shown on the card; the full lists live in the artifact.
const CARD_NOTE_LIMIT: usize = 2;

pub fn render(
    skill: Option<&SkillReport>,
    theme: &Theme,
    frame: &mut Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border)
        .title(Span::styled(" Detail ", theme.panel_title));

    let Some(skill) = skill else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "no skill matches the current filter",
            theme.muted,
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(skill.name.clone(), theme.panel_title),
            Span::raw("  "),
            Span::styled(
                format!("{} RISK", skill.security_risk.to_string().to_uppercase()),
                theme.risk_style(skill.security_risk),
            ),
        ]),
        Line::from(skill.description.clone()),
        Line::from(Span::styled(skill.location.clone(), theme.muted)),
        Line::from(vec![
            Span::styled(
                format!("Overall {} ({})", skill.overall_score, skill.band),
                theme.score_style(skill.overall_score),
            ),
            Span::raw("  "),
            Span::styled(
                format!("Quality {}", skill.quality_score),
                theme.score_style(skill.quality_score),
            ),
            Span::raw("  "),
            Span::styled(
                format!("Security {}", skill.security_score),
                theme.score_style(skill.security_score),
            ),
        ]),
        Line::from(if skill.has_skill_file {
            Span::styled("SKILL.md found", theme.muted)
        } else {
            Span::styled("No SKILL.md", theme.error)
        }),
    ];

    if !skill.security_findings.is_empty() {
        lines.push(Line::from(Span::styled(
            "Security findings:",
            theme.panel_title,
        )));
        for finding in skill.security_findings.iter().take(CARD_NOTE_LIMIT) {
            lines.push(Line::from(format!("  - {finding}")));
        }
    }
    if !skill.quality_gaps.is_empty() {
        lines.push(Line::from(Span::styled("Quality gaps:", theme.panel_title)));
        for gap in skill.quality_gaps.iter().take(CARD_NOTE_LIMIT) {
            lines.push(Line::from(format!("  - {gap}")));
        }
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(card, area);
}
