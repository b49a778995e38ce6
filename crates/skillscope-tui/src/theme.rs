use ratatui::style::{Color, Modifier, Style};
use skillscope_report::RiskLevel;

pub struct Theme {
    pub header: Style,
    pub panel_border: Style,
    pub panel_title: Style,
    pub status_bar: Style,
    pub error: Style,
    pub muted: Style,
    pub highlight: Style,
    pub link: Style,
    pub score_great: Style,
    pub score_good: Style,
    pub score_fair: Style,
    pub score_bad: Style,
    pub risk_low: Style,
    pub risk_medium: Style,
    pub risk_high: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Rgb(200, 220, 255))
                .bg(Color::Rgb(20, 40, 80))
                .add_modifier(Modifier::BOLD),
            panel_border: Style::default().fg(Color::Gray),
            panel_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().fg(Color::White).bg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
            muted: Style::default().fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Rgb(215, 150, 60))
                .add_modifier(Modifier::BOLD),
            link: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
            score_great: Style::default().fg(Color::Green),
            score_good: Style::default().fg(Color::Cyan),
            score_fair: Style::default().fg(Color::Yellow),
            score_bad: Style::default().fg(Color::Red),
            risk_low: Style::default().fg(Color::Green),
            risk_medium: Style::default().fg(Color::Yellow),
            risk_high: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Badge color bands match the published score thresholds.
    #[must_use]
    pub fn score_style(&self, score: u8) -> Style {
        match score {
            85.. => self.score_great,
            70.. => self.score_good,
            50.. => self.score_fair,
            _ => self.score_bad,
        }
    }

    #[must_use]
    pub fn risk_style(&self, risk: RiskLevel) -> Style {
        match risk {
            RiskLevel::Low => self.risk_low,
            RiskLevel::Medium => self.risk_medium,
            RiskLevel::High => self.risk_high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_style_bands() {
        let theme = Theme::default();
        assert_eq!(theme.score_style(85), theme.score_great);
        assert_eq!(theme.score_style(84), theme.score_good);
        assert_eq!(theme.score_style(70), theme.score_good);
        assert_eq!(theme.score_style(69), theme.score_fair);
        assert_eq!(theme.score_style(50), theme.score_fair);
        assert_eq!(theme.score_style(49), theme.score_bad);
    }

    #[test]
    fn risk_styles_distinct() {
        let theme = Theme::default();
        assert_ne!(
            theme.risk_style(RiskLevel::Low),
            theme.risk_style(RiskLevel::High)
        );
    }
}
