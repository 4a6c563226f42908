//! 2D buffer of cells

use super::Cell;
use crate::geometry::Rect;
use crate::style::{Line, Text};
use unicode_width::UnicodeWidthChar;

/// Row-major grid of cells covering an area of the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    area: Rect,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            cells: vec![Cell::empty(); area.area() as usize],
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if self.area.contains(x, y) {
            let local_x = (x - self.area.x) as usize;
            let local_y = (y - self.area.y) as usize;
            Some(local_y * self.area.width as usize + local_x)
        } else {
            None
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Draw a line starting at `(x, y)`, clipped to the buffer's right edge.
    ///
    /// A wide character that would straddle the edge is dropped. Returns the
    /// column after the last cell written.
    pub fn set_line(&mut self, x: u16, y: u16, line: &Line) -> u16 {
        let right = self.area.right();
        let mut col = x;
        for span in &line.spans {
            for ch in span.content.chars() {
                let width = ch.width().unwrap_or(0) as u16;
                if width == 0 {
                    continue;
                }
                if col.saturating_add(width) > right {
                    return col;
                }
                self.set(col, y, Cell::new(ch.to_string(), span.style));
                for extra in 1..width {
                    self.set(col + extra, y, Cell::continuation());
                }
                col += width;
            }
        }
        col
    }

    /// Draw successive lines of `text` into `area`, one per row, clipped to it
    pub fn set_text(&mut self, area: Rect, text: &Text) {
        let area = self.area.intersect(&area);
        for (y, line) in area.rows().zip(text.lines.iter()) {
            let mut clipped = Buffer::new(Rect::new(area.x, y, area.width, 1));
            clipped.set_line(area.x, y, line);
            self.merge(&clipped);
        }
    }

    /// Copy every cell of `other` into this buffer at the same positions
    pub fn merge(&mut self, other: &Buffer) {
        for (x, y, cell) in other.iter() {
            self.set(x, y, cell.clone());
        }
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Iterate over all cells with their absolute positions
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        let width = self.area.width.max(1) as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = self.area.x + (i % width) as u16;
            let y = self.area.y + (i / width) as u16;
            (x, y, cell)
        })
    }

    /// Cells that differ from `previous` (all cells if the areas differ)
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let same_area = self.area == previous.area;
        self.iter().filter(move |(x, y, cell)| {
            !same_area || previous.get(*x, *y).map_or(true, |c| c != *cell)
        })
    }

    /// Plain text of one row, trailing blanks trimmed
    pub fn row_text(&self, y: u16) -> String {
        let mut row = String::new();
        for x in self.area.x..self.area.right() {
            if let Some(cell) = self.get(x, y) {
                row.push_str(&cell.symbol);
            }
        }
        row.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Span, Style};

    #[test]
    fn test_set_line_clips_at_edge() {
        let mut buf = Buffer::new(Rect::new(0, 0, 5, 1));
        let end = buf.set_line(0, 0, &Line::raw("Hello world"));
        assert_eq!(end, 5);
        assert_eq!(buf.row_text(0), "Hello");
    }

    #[test]
    fn test_set_line_keeps_span_styles() {
        let mut buf = Buffer::new(Rect::new(0, 0, 10, 1));
        let red = Style::new().fg(Color::Red);
        let line = Line::from_spans([Span::raw("a"), Span::styled("b", red)]);
        buf.set_line(0, 0, &line);
        assert_eq!(buf.get(1, 0).map(|c| c.style), Some(red));
    }

    #[test]
    fn test_wide_char_uses_continuation_cell() {
        let mut buf = Buffer::new(Rect::new(0, 0, 3, 1));
        buf.set_line(0, 0, &Line::raw("日本"));
        assert_eq!(buf.get(0, 0).map(|c| c.symbol.as_str()), Some("日"));
        assert!(buf.get(1, 0).is_some_and(Cell::is_continuation));
        // second glyph does not fit in the remaining column
        assert_eq!(buf.get(2, 0), Some(&Cell::empty()));
        assert_eq!(buf.row_text(0), "日");
    }

    #[test]
    fn test_set_text_clips_to_area() {
        let mut buf = Buffer::new(Rect::new(0, 0, 10, 3));
        buf.set_text(Rect::new(2, 1, 3, 1), &Text::raw("abcdef\nsecond"));
        assert_eq!(buf.row_text(0), "");
        assert_eq!(buf.row_text(1), "  abc");
        assert_eq!(buf.row_text(2), "");
    }

    #[test]
    fn test_diff_reports_changed_cells_only() {
        let area = Rect::new(0, 0, 4, 1);
        let previous = Buffer::new(area);
        let mut next = Buffer::new(area);
        next.set_line(1, 0, &Line::raw("x"));
        let changed: Vec<(u16, u16)> = next.diff(&previous).map(|(x, y, _)| (x, y)).collect();
        assert_eq!(changed, vec![(1, 0)]);

        let resized = Buffer::new(Rect::new(0, 0, 2, 1));
        assert_eq!(next.diff(&resized).count(), 4);
    }
}
