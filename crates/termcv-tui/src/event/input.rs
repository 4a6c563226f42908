//! Input event types

pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use crossterm::event::KeyEventKind;

/// An input event delivered to the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    FocusGained,
    FocusLost,
    Paste(String),
}

impl Event {
    /// Key press with no modifiers
    pub fn key(code: KeyCode) -> Self {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Key press with the control modifier
    pub fn ctrl(c: char) -> Self {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// Convert a crossterm event. Key releases and repeats are dropped so
    /// every physical key press is seen exactly once.
    pub fn from_terminal(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::Event as CEvent;
        match event {
            CEvent::Key(key) if key.kind != KeyEventKind::Press => None,
            CEvent::Key(key) => Some(Event::Key(key)),
            CEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
            CEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            CEvent::FocusGained => Some(Event::FocusGained),
            CEvent::FocusLost => Some(Event::FocusLost),
            CEvent::Paste(s) => Some(Event::Paste(s)),
        }
    }

    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Event::Key(key) => Some(key),
            _ => None,
        }
    }

    /// The character of a plain (no control/alt) character key press
    pub fn as_char(&self) -> Option<char> {
        match self {
            Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                modifiers,
                ..
            }) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(*c),
            _ => None,
        }
    }

    /// The character of a control+character key press
    pub fn as_ctrl(&self) -> Option<char> {
        match self {
            Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                modifiers,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL) => Some(*c),
            _ => None,
        }
    }

    pub fn is_resize(&self) -> bool {
        matches!(self, Event::Resize { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn test_as_char_and_ctrl() {
        assert_eq!(Event::key(KeyCode::Char('q')).as_char(), Some('q'));
        assert_eq!(Event::ctrl('c').as_char(), None);
        assert_eq!(Event::ctrl('c').as_ctrl(), Some('c'));
        assert_eq!(Event::key(KeyCode::Esc).as_char(), None);

        let shift_g = Event::Key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(shift_g.as_char(), Some('G'));
    }

    #[test]
    fn test_release_events_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            Event::from_terminal(crossterm::event::Event::Key(release)),
            None
        );
        assert_eq!(
            Event::from_terminal(crossterm::event::Event::Resize(80, 24)),
            Some(Event::Resize {
                width: 80,
                height: 24
            })
        );
    }
}
