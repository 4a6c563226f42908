//! Input events and the async loop that delivers them

mod event_loop;
mod input;

pub use event_loop::EventLoop;
pub use input::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Outcome of offering an event to a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Handled; state may have changed
    Consumed,
    /// Not relevant to this handler
    Ignored,
    /// End the session
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}
