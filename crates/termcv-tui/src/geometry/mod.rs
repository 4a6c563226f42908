//! Terminal geometry: sizes and rectangles measured in cells

mod rect;
mod size;

pub use rect::Rect;
pub use size::Size;
