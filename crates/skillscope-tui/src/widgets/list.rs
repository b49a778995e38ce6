use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use skillscope_report::SkillReport;

use crate::theme::Theme;

pub fn render(
    skills: &[&SkillReport],
    selected: usize,
    theme: &Theme,
    frame: &mut Frame<'_>,
    area: Rect,
) {
    let items: Vec<ListItem<'_>> = skills
        .iter()
        .map(|skill| {
            let marker = if skill.has_skill_file { " " } else { "!" };
            ListItem::new(Line::from(vec![
                Span::styled(marker.to_owned(), theme.muted),
                Span::raw(format!(" {} ", skill.name)),
                Span::styled(
                    format!("{:>3}", skill.overall_score),
                    theme.score_style(skill.overall_score),
                ),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border)
        .title(Span::styled(
            format!(" Skills ({}) ", skills.len()),
            theme.panel_title,
        ));

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !skills.is_empty() {
        state.select(Some(selected.min(skills.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
