//! The résumé viewer as a `termcv_tui::App`
//!
//! One [`Session`] per viewer holds all mutable state. Each event goes
//! through the same pipeline: map to an [`Action`], update the viewport,
//! re-run layout if the viewport is dirty, then draw the frame (identity
//! band, visible body slice, footer).

use crate::config::AppConfig;
use crate::error::ThemeError;
use crate::layout::{LayoutEngine, FOOTER_HEIGHT};
use crate::model::Resume;
use crate::theme::{Palette, StyleSheet};
use crate::viewport::Viewport;
use std::sync::Arc;
use termcv_tui::{
    App, Buffer, Constraint, Event, EventResult, KeyCode, Layout, Line, MouseEventKind, Rect,
    Text, Widget,
};
use tracing::{debug, info};

/// Text shown until the terminal size is known
pub const INITIALIZING: &str = "Initializing...";

/// What an input event asks the viewer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Scroll by a number of lines; negative is up
    Scroll(isize),
    PageDown,
    PageUp,
    HalfPageDown,
    HalfPageUp,
    Top,
    Bottom,
}

/// Key and mouse bindings
pub fn action_for(event: &Event, wheel_delta: usize) -> Option<Action> {
    if let Some(c) = event.as_ctrl() {
        return match c {
            'c' => Some(Action::Quit),
            'd' => Some(Action::HalfPageDown),
            'u' => Some(Action::HalfPageUp),
            _ => None,
        };
    }

    if let Some(c) = event.as_char() {
        return match c {
            'q' => Some(Action::Quit),
            'j' => Some(Action::Scroll(1)),
            'k' => Some(Action::Scroll(-1)),
            ' ' | 'f' => Some(Action::PageDown),
            'b' => Some(Action::PageUp),
            'd' => Some(Action::HalfPageDown),
            'u' => Some(Action::HalfPageUp),
            'g' => Some(Action::Top),
            'G' => Some(Action::Bottom),
            _ => None,
        };
    }

    match event {
        Event::Key(key) => match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Down => Some(Action::Scroll(1)),
            KeyCode::Up => Some(Action::Scroll(-1)),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Home => Some(Action::Top),
            KeyCode::End => Some(Action::Bottom),
            _ => None,
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::Scroll(wheel_delta as isize)),
            MouseEventKind::ScrollUp => Some(Action::Scroll(-(wheel_delta as isize))),
            _ => None,
        },
        _ => None,
    }
}

/// Per-viewer state. Sessions share the résumé but nothing mutable.
#[derive(Debug)]
pub struct Session {
    resume: Arc<Resume>,
    viewport: Viewport,
    viewer: Option<String>,
}

impl Session {
    pub fn new(resume: Arc<Resume>, viewer: Option<String>) -> Self {
        Self {
            resume,
            viewport: Viewport::new(),
            viewer,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewer(&self) -> Option<&str> {
        self.viewer.as_deref()
    }

    /// Apply one action to the viewport
    pub fn apply(&mut self, action: Action) -> EventResult {
        let viewport = &mut self.viewport;
        match action {
            Action::Quit => return EventResult::Quit,
            Action::Scroll(delta) => viewport.scroll(delta),
            Action::PageDown => viewport.page_down(),
            Action::PageUp => viewport.page_up(),
            Action::HalfPageDown => viewport.half_page_down(),
            Action::HalfPageUp => viewport.half_page_up(),
            Action::Top => viewport.goto_top(),
            Action::Bottom => viewport.goto_bottom(),
        }
        EventResult::Consumed
    }

    /// Re-run layout if the viewport changed width since the last frame
    pub fn reflow_if_dirty(&mut self, engine: &LayoutEngine) {
        if self.viewport.is_ready() && self.viewport.is_dirty() {
            let width = self.viewport.width() as usize;
            let document = engine.layout(&self.resume, width);
            debug!(width, lines = document.height(), "reflowed document");
            self.viewport.set_document(document);
        }
    }
}

/// The résumé viewer application
#[derive(Debug, Clone)]
pub struct ResumeApp {
    resume: Arc<Resume>,
    engine: LayoutEngine,
    wheel_delta: usize,
    viewer: Option<String>,
}

impl ResumeApp {
    pub fn new(resume: Arc<Resume>, engine: LayoutEngine) -> Self {
        Self {
            resume,
            engine,
            wheel_delta: 3,
            viewer: None,
        }
    }

    /// Build from configuration: palette, skill columns and wheel speed
    pub fn from_config(resume: Arc<Resume>, config: &AppConfig) -> Result<Self, ThemeError> {
        let palette = Palette::from_config(&config.theme)?;
        let engine = LayoutEngine::new(StyleSheet::new(palette), config.layout.skill_columns);
        Ok(Self::new(resume, engine).wheel_delta(config.layout.mouse_wheel_delta))
    }

    pub fn wheel_delta(mut self, lines: usize) -> Self {
        self.wheel_delta = lines.max(1);
        self
    }

    /// Identify who is viewing, for logging only
    pub fn viewer(mut self, viewer: Option<String>) -> Self {
        self.viewer = viewer.filter(|v| !v.trim().is_empty());
        self
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Update the session for one event
    pub fn update(&self, session: &mut Session, event: &Event) -> EventResult {
        if let Event::Resize { width, height } = *event {
            debug!(width, height, "resize");
            session.viewport.resize(width, height);
            return EventResult::Consumed;
        }
        match action_for(event, self.wheel_delta) {
            Some(action) => session.apply(action),
            None => EventResult::Ignored,
        }
    }

    /// Draw the frame for the current session state
    pub fn draw(&self, session: &Session, area: Rect, buf: &mut Buffer) {
        let document = match session.viewport.document() {
            Some(document) if session.viewport.is_ready() => document,
            _ => {
                let (_, below) = area.split_vertical(1);
                let indent = Rect::new(
                    below.x.saturating_add(2),
                    below.y,
                    below.width.saturating_sub(2),
                    below.height,
                );
                Line::raw(INITIALIZING).render(indent, buf);
                return;
            }
        };

        let regions = Layout::vertical([
            Constraint::Fixed(document.band_height() as u16),
            Constraint::Fill(1),
            Constraint::Fixed(FOOTER_HEIGHT as u16),
        ])
        .split(area);

        document.band().render(regions[0], buf);
        session.viewport.visible_slice().render(regions[1], buf);
        let footer: Text = self
            .engine
            .footer(area.width as usize, session.viewport.percent());
        footer.render(regions[2], buf);
    }
}

impl App for ResumeApp {
    type State = Session;

    fn init(&self) -> Session {
        info!(viewer = self.viewer.as_deref().unwrap_or("anonymous"), "session started");
        Session::new(Arc::clone(&self.resume), self.viewer.clone())
    }

    fn handle_event(&mut self, event: Event, session: &mut Session) -> bool {
        if self.update(session, &event).is_quit() {
            info!(viewer = session.viewer().unwrap_or("anonymous"), "session ended");
            return false;
        }
        true
    }

    fn prepare(&mut self, session: &mut Session) {
        session.reflow_if_dirty(&self.engine);
    }

    fn render(&self, session: &Session, area: Rect, buf: &mut Buffer) {
        self.draw(session, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Identity, Section, SectionKind};
    use termcv_tui::{KeyEvent, KeyModifiers, MouseEvent};

    fn app(lines: usize) -> ResumeApp {
        let content = (0..lines)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let resume = Resume::new(
            Identity {
                name: "Ada".into(),
                ..Identity::default()
            },
            vec![Section::new("About", SectionKind::Summary(content))],
        );
        ResumeApp::new(
            Arc::new(resume),
            LayoutEngine::new(StyleSheet::default(), 5),
        )
    }

    fn wheel(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for(&Event::key(KeyCode::Char('q')), 3), Some(Action::Quit));
        assert_eq!(action_for(&Event::key(KeyCode::Esc), 3), Some(Action::Quit));
        assert_eq!(action_for(&Event::ctrl('c'), 3), Some(Action::Quit));
        assert_eq!(action_for(&Event::key(KeyCode::Char('c')), 3), None);
    }

    #[test]
    fn test_navigation_keys() {
        let shift_g = Event::Key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(action_for(&shift_g, 3), Some(Action::Bottom));
        assert_eq!(action_for(&Event::key(KeyCode::Char('g')), 3), Some(Action::Top));
        assert_eq!(action_for(&Event::ctrl('d'), 3), Some(Action::HalfPageDown));
        assert_eq!(action_for(&Event::key(KeyCode::PageUp), 3), Some(Action::PageUp));
        assert_eq!(action_for(&Event::key(KeyCode::Down), 3), Some(Action::Scroll(1)));
        assert_eq!(action_for(&wheel(MouseEventKind::ScrollDown), 3), Some(Action::Scroll(3)));
        assert_eq!(action_for(&wheel(MouseEventKind::ScrollUp), 2), Some(Action::Scroll(-2)));
        assert_eq!(action_for(&Event::FocusGained, 3), None);
    }

    #[test]
    fn test_initializing_frame_before_first_size() {
        let app = app(5);
        let session = app.init();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::new(area);
        app.draw(&session, area, &mut buf);
        assert_eq!(buf.row_text(0), "");
        assert_eq!(buf.row_text(1), "  Initializing...");
    }

    #[test]
    fn test_frame_pins_band_and_footer() {
        let mut app = app(30);
        let mut session = app.init();
        assert!(app.handle_event(Event::Resize { width: 40, height: 12 }, &mut session));
        app.prepare(&mut session);
        app.handle_event(Event::key(KeyCode::Char('j')), &mut session);
        app.handle_event(Event::key(KeyCode::Char('j')), &mut session);

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::new(area);
        app.render(&session, area, &mut buf);

        assert!(buf.row_text(1).starts_with("│ Ada ├"));
        // body rows 3..9 start at the scroll offset
        assert_eq!(buf.row_text(3), " line 0");
        assert_eq!(buf.row_text(8), " line 5");
        assert!(buf.row_text(10).contains('┤'));
        assert!(buf.row_text(10).ends_with("8% │"));
    }

    #[test]
    fn test_quit_stops_session() {
        let mut app = app(1);
        let mut session = app.init();
        assert!(!app.handle_event(Event::key(KeyCode::Esc), &mut session));
    }

    #[test]
    fn test_resize_marks_dirty_and_prepare_reflows() {
        let mut app = app(3);
        let mut session = app.init();
        app.handle_event(Event::Resize { width: 50, height: 20 }, &mut session);
        assert!(session.viewport().is_dirty());
        app.prepare(&mut session);
        assert!(!session.viewport().is_dirty());
        assert_eq!(session.viewport().document().map(|d| d.width()), Some(50));
    }

    #[test]
    fn test_blank_viewer_is_anonymous() {
        let app = app(1).viewer(Some("  ".into()));
        assert_eq!(app.init().viewer(), None);
        let app = app.viewer(Some("ada".into()));
        assert_eq!(app.init().viewer(), Some("ada"));
    }
}
