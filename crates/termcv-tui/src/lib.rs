//! termcv-tui: the terminal substrate the résumé renderer is built on
//!
//! This crate provides:
//! - Styled text (`Span`, `Line`, `Text`) with display-width aware wrapping
//! - A box decorator (`Block`) with per-edge border glyphs, padding and margin
//! - Cell-based buffer system with diff rendering
//! - Terminal abstraction over crossterm
//! - Constraint-based vertical/horizontal splitting
//! - An event source over crossterm or an injected channel
//! - An `App` trait and runner driving `event -> update -> render`

pub mod app;
pub mod block;
pub mod buffer;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod style;
pub mod terminal;
pub mod widget;

// Re-export commonly used types
pub use app::{App, AppRunner, EventSource, FrameSink};
pub use block::{Block, Border, Sides, Spacing};
pub use buffer::{Buffer, Cell};
pub use event::{Event, EventLoop, EventResult, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
pub use geometry::{Rect, Size};
pub use layout::{Constraint, Direction, Layout};
pub use style::{
    align, display_width, wrap_text, Alignment, Color, Line, Modifier, Span, Style, Text,
};
pub use terminal::{RawModeGuard, Terminal};
pub use widget::Widget;
