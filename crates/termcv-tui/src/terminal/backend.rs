//! Diffing terminal writer

use super::RawModeGuard;
use crate::buffer::Buffer;
use crate::geometry::Size;
use crossterm::{
    cursor::{Hide, MoveTo},
    event::EnableMouseCapture,
    execute, queue,
    style::{PrintStyledContent, ResetColor, StyledContent},
    terminal::{self, enable_raw_mode, Clear, ClearType, EnterAlternateScreen},
};
use std::io::{self, Stdout, Write};

/// Writes frames to a terminal, only emitting cells that changed since the
/// previous frame. A size change invalidates the previous frame and forces a
/// full redraw.
pub struct Terminal<W: Write = Stdout> {
    writer: W,
    size: Size,
    prev_buffer: Option<Buffer>,
}

impl Terminal<Stdout> {
    /// Terminal on stdout, sized from the current window
    pub fn stdout() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_writer(io::stdout(), Size::new(width, height)))
    }

    /// Enter raw mode and the alternate screen, hide the cursor and capture
    /// the mouse. Everything is undone when the guard drops.
    pub fn enter_raw_mode(&mut self) -> io::Result<RawModeGuard> {
        enable_raw_mode()?;
        let guard = RawModeGuard::new();
        execute!(self.writer, EnterAlternateScreen, Hide, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> Terminal<W> {
    pub fn with_writer(writer: W, size: Size) -> Self {
        Self {
            writer,
            size,
            prev_buffer: None,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Record a new size; the next draw repaints everything
    pub fn resize(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.invalidate();
        }
    }

    /// Forget the previous frame so the next draw is a full redraw
    pub fn invalidate(&mut self) {
        self.prev_buffer = None;
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Draw a frame, writing only cells that differ from the last one
    pub fn draw(&mut self, buffer: &Buffer) -> io::Result<()> {
        match self.prev_buffer.take() {
            Some(prev) if prev.area() == buffer.area() => {
                for (x, y, cell) in buffer.diff(&prev) {
                    if cell.is_continuation() {
                        continue;
                    }
                    queue!(
                        self.writer,
                        MoveTo(x, y),
                        PrintStyledContent(StyledContent::new(
                            cell.style.to_content_style(),
                            cell.symbol.as_str()
                        ))
                    )?;
                }
            }
            _ => self.draw_full(buffer)?,
        }
        self.prev_buffer = Some(buffer.clone());
        self.writer.flush()
    }

    fn draw_full(&mut self, buffer: &Buffer) -> io::Result<()> {
        queue!(self.writer, ResetColor, Clear(ClearType::All))?;
        let area = buffer.area();
        for y in area.rows() {
            queue!(self.writer, MoveTo(area.x, y))?;
            for x in area.x..area.right() {
                if let Some(cell) = buffer.get(x, y).filter(|c| !c.is_continuation()) {
                    queue!(
                        self.writer,
                        PrintStyledContent(StyledContent::new(
                            cell.style.to_content_style(),
                            cell.symbol.as_str()
                        ))
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::style::Line;

    fn frame(text: &str) -> Buffer {
        let mut buf = Buffer::new(Rect::new(0, 0, 6, 1));
        buf.set_line(0, 0, &Line::raw(text));
        buf
    }

    #[test]
    fn test_second_draw_only_writes_changes() {
        let mut term = Terminal::with_writer(Vec::new(), Size::new(6, 1));
        term.draw(&frame("abc")).unwrap();
        let first = term.writer().len();
        assert!(String::from_utf8_lossy(term.writer()).contains('a'));

        term.draw(&frame("abX")).unwrap();
        let second = String::from_utf8_lossy(&term.writer()[first..]).to_string();
        assert!(second.contains('X'));
        assert!(!second.contains('a'));
    }

    #[test]
    fn test_resize_forces_full_redraw() {
        let mut term = Terminal::with_writer(Vec::new(), Size::new(6, 1));
        term.draw(&frame("abc")).unwrap();
        term.resize(Size::new(6, 2));
        let before = term.writer().len();
        term.draw(&frame("abc")).unwrap();
        let redraw = String::from_utf8_lossy(&term.writer()[before..]).to_string();
        assert!(redraw.contains('a'));
        assert_eq!(term.size(), Size::new(6, 2));
    }
}
