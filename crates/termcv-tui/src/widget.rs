//! Things that can draw themselves into a buffer

use crate::buffer::Buffer;
use crate::geometry::Rect;
use crate::style::{Line, Text};

/// A renderable element
pub trait Widget {
    /// Draw into `area` of `buf`; content outside the area is clipped
    fn render(&self, area: Rect, buf: &mut Buffer);
}

impl Widget for Text {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        buf.set_text(area, self);
    }
}

impl Widget for Line {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if !area.is_empty() {
            buf.set_text(Rect::new(area.x, area.y, area.width, 1), &Text::from_lines([self.clone()]));
        }
    }
}

impl Widget for [Line] {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        for (y, line) in area.rows().zip(self) {
            line.render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_slice_renders_one_per_row() {
        let lines = vec![Line::raw("one"), Line::raw("two"), Line::raw("three")];
        let mut buf = Buffer::new(Rect::new(0, 0, 4, 2));
        lines[..].render(buf.area(), &mut buf);
        assert_eq!(buf.row_text(0), "one");
        assert_eq!(buf.row_text(1), "two");
    }
}
