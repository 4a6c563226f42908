//! Styling system for terminal text

mod color;
mod modifier;
mod style;
mod styled;
mod text;

pub use color::Color;
pub use modifier::Modifier;
pub use style::Style;
pub use styled::{Line, Span, Text};
pub use text::{align, display_width, wrap_text, Alignment};
