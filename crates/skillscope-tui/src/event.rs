use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use skillscope_catalog::CatalogPreview;
use skillscope_report::Report;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    Viewer(ViewerEvent),
}

/// Data arriving from outside the terminal: report refreshes and the
/// best-effort community catalog.
#[derive(Debug)]
pub enum ViewerEvent {
    ReportLoaded(Box<Report>),
    ReportFailed(String),
    Catalog(Option<CatalogPreview>),
}

pub struct EventReader {
    tx: mpsc::Sender<AppEvent>,
    tick_rate: Duration,
}

impl EventReader {
    #[must_use]
    pub fn new(tx: mpsc::Sender<AppEvent>, tick_rate: Duration) -> Self {
        Self { tx, tick_rate }
    }

    /// Blocking loop — must run on a dedicated `std::thread`, not a tokio worker.
    pub fn run(self) {
        loop {
            if event::poll(self.tick_rate).unwrap_or(false) {
                let evt = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => AppEvent::Key(key),
                    Ok(CrosstermEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                    _ => continue,
                };
                if self.tx.blocking_send(evt).is_err() {
                    break;
                }
            } else if self.tx.blocking_send(AppEvent::Tick).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_event_debug() {
        let e = ViewerEvent::ReportFailed("boom".into());
        let s = format!("{e:?}");
        assert!(s.contains("ReportFailed"));
        assert!(s.contains("boom"));
    }

    #[test]
    fn event_reader_construction() {
        let (tx, _rx) = mpsc::channel(16);
        let reader = EventReader::new(tx, Duration::from_millis(100));
        assert_eq!(reader.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn app_event_variants() {
        assert!(matches!(AppEvent::Tick, AppEvent::Tick));
        assert!(matches!(AppEvent::Resize(80, 24), AppEvent::Resize(80, 24)));
    }
}
