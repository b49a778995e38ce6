//! Viewer application state.
//!
//! All state lives in [`App`] and is passed explicitly into the render and
//! filter functions, so both are unit-testable without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use skillscope_catalog::CatalogPreview;
use skillscope_report::{Report, SkillReport};
use tokio::sync::mpsc;

use crate::event::{AppEvent, ViewerEvent};
use crate::theme::Theme;
use crate::widgets;

/// Community catalog panel state. Starts loading, never blocks the report.
#[derive(Debug)]
pub enum CommunityState {
    Loading,
    Loaded(CatalogPreview),
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

pub struct App {
    report: Report,
    query: String,
    selected: usize,
    community: CommunityState,
    status: Option<StatusLine>,
    refresh_tx: mpsc::Sender<()>,
    theme: Theme,
    pub should_quit: bool,
}

/// Case-insensitive free-text filter over name, description, location,
/// overall score (as text), and risk level. An empty query keeps everything.
#[must_use]
pub fn filter_skills<'a>(skills: &'a [SkillReport], query: &str) -> Vec<&'a SkillReport> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return skills.iter().collect();
    }
    skills
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&q)
                || s.description.to_lowercase().contains(&q)
                || s.location.to_lowercase().contains(&q)
                || s.overall_score.to_string().contains(&q)
                || s.security_risk.to_string().contains(&q)
        })
        .collect()
}

impl App {
    #[must_use]
    pub fn new(report: Report, refresh_tx: mpsc::Sender<()>) -> Self {
        Self {
            report,
            query: String::new(),
            selected: 0,
            community: CommunityState::Loading,
            status: None,
            refresh_tx,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&SkillReport> {
        filter_skills(&self.report.skills, &self.query)
    }

    #[must_use]
    pub fn selected_skill(&self) -> Option<&SkillReport> {
        self.visible().get(self.selected).copied()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Viewer(viewer) => self.handle_viewer_event(viewer),
            AppEvent::Tick | AppEvent::Resize(..) => {}
        }
    }

    fn handle_viewer_event(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::ReportLoaded(report) => {
                self.report = *report;
                self.status = Some(StatusLine {
                    text: format!("report refreshed: {} skill(s)", self.report.count),
                    is_error: false,
                });
                self.clamp_selection();
            }
            ViewerEvent::ReportFailed(reason) => {
                self.status = Some(StatusLine {
                    text: format!("refresh failed: {reason}"),
                    is_error: true,
                });
            }
            ViewerEvent::Catalog(Some(preview)) => {
                self.community = CommunityState::Loaded(preview);
            }
            ViewerEvent::Catalog(None) => {
                self.community = CommunityState::Unavailable;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('r') => self.request_refresh(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.query.push(c);
                self.selected = 0;
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.selected = 0;
            }
            KeyCode::Esc => {
                if self.query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.query.clear();
                    self.selected = 0;
                }
            }
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                self.selected += 1;
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn request_refresh(&mut self) {
        self.status = Some(StatusLine {
            text: "refreshing...".to_owned(),
            is_error: false,
        });
        if self.refresh_tx.try_send(()).is_ok() {
            // The refresh pass re-fetches the catalog too.
            self.community = CommunityState::Loading;
        } else {
            tracing::warn!("refresh request dropped, channel busy or closed");
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let visible = self.visible();
        widgets::summary::render(&self.report, visible.len(), &self.theme, frame, rows[0]);
        widgets::search::render(&self.query, &self.theme, frame, rows[1]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[2]);

        widgets::list::render(&visible, self.selected, &self.theme, frame, columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(11)])
            .split(columns[1]);

        widgets::detail::render(self.selected_skill(), &self.theme, frame, right[0]);
        widgets::community::render(&self.community, &self.theme, frame, right[1]);
        widgets::status::render(self.status.as_ref(), &self.theme, frame, rows[3]);
    }
}
