//! Styled runs of text and the lines and blocks built from them

use super::Style;
use crossterm::style::StyledContent;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// One run of text in a single style
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

impl Span {
    pub fn raw<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            style: Style::default(),
        }
    }

    pub fn styled<S: Into<String>>(content: S, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Display width in terminal cells
    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.content.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn write_ansi(&self, out: &mut String) {
        if self.style.is_plain() {
            out.push_str(&self.content);
        } else {
            // Writing into a String cannot fail
            let _ = write!(
                out,
                "{}",
                StyledContent::new(self.style.to_content_style(), &self.content)
            );
        }
    }
}

/// One terminal row made of spans
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn empty() -> Self {
        Self { spans: Vec::new() }
    }

    pub fn raw<S: Into<String>>(content: S) -> Self {
        Self {
            spans: vec![Span::raw(content)],
        }
    }

    pub fn styled<S: Into<String>>(content: S, style: Style) -> Self {
        Self {
            spans: vec![Span::styled(content, style)],
        }
    }

    pub fn from_spans<I: IntoIterator<Item = Span>>(spans: I) -> Self {
        Self {
            spans: spans.into_iter().collect(),
        }
    }

    /// Total display width of this line
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.width()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.is_empty())
    }

    pub fn push(&mut self, span: Span) {
        if !span.is_empty() {
            self.spans.push(span);
        }
    }

    /// Append all spans of another line
    pub fn append(&mut self, other: Line) {
        for span in other.spans {
            self.push(span);
        }
    }

    /// Apply a style under every span (span styles take precedence)
    pub fn style(mut self, style: Style) -> Self {
        for span in &mut self.spans {
            span.style = style.patch(span.style);
        }
        self
    }

    /// Text content without any styling
    pub fn to_plain(&self) -> String {
        self.spans.iter().map(|s| s.content.as_str()).collect()
    }

    /// Text content with ANSI escape sequences for each styled span
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            span.write_ansi(&mut out);
        }
        out
    }
}

/// A block of lines, top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub lines: Vec<Line>,
}

impl Text {
    pub fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    /// Unstyled text, one line per `\n`-separated piece
    pub fn raw<S: AsRef<str>>(content: S) -> Self {
        Self::styled(content, Style::default())
    }

    /// Every line gets `style`. An empty string gives no lines.
    pub fn styled<S: AsRef<str>>(content: S, style: Style) -> Self {
        Self {
            lines: content
                .as_ref()
                .lines()
                .map(|l| Line::styled(l.to_string(), style))
                .collect(),
        }
    }

    pub fn from_lines<I: IntoIterator<Item = Line>>(lines: I) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    /// Height in lines
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Maximum width of any line
    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.width()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Append `count` empty lines
    pub fn push_blank(&mut self, count: usize) {
        self.lines
            .extend(std::iter::repeat_with(Line::empty).take(count));
    }

    pub fn extend(&mut self, other: Text) {
        self.lines.extend(other.lines);
    }

    /// All lines joined with `\n`, without styling
    pub fn to_plain_string(&self) -> String {
        self.lines
            .iter()
            .map(Line::to_plain)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// All lines joined with `\n`, with ANSI styling
    pub fn to_ansi_string(&self) -> String {
        self.lines
            .iter()
            .map(Line::to_ansi)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Line> for Text {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_span_width_is_display_width() {
        assert_eq!(Span::raw("hello").width(), 5);
        assert_eq!(Span::raw("日本語").width(), 6);
    }

    #[test]
    fn test_line_push_skips_empty_spans() {
        let mut line = Line::raw("a");
        line.push(Span::raw(""));
        line.push(Span::raw("b"));
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.to_plain(), "ab");
    }

    #[test]
    fn test_text_raw_splits_lines() {
        let text = Text::raw("Ada\nEngineer\nLondon");
        assert_eq!(text.lines.len(), 3);
        assert_eq!(text.lines[1].to_plain(), "Engineer");
        assert!(Text::raw("").is_empty());
    }

    #[test]
    fn test_ansi_wraps_only_styled_spans() {
        let line = Line::from_spans(vec![
            Span::raw("plain "),
            Span::styled("bold", Style::new().bold()),
        ]);
        let ansi = line.to_ansi();
        assert!(ansi.starts_with("plain "));
        assert!(ansi.contains("\u{1b}["));
        assert!(ansi.contains("bold"));
        assert_eq!(line.to_plain(), "plain bold");
    }

    #[test]
    fn test_line_style_keeps_span_colors() {
        let line = Line::styled("x", Style::new().fg(Color::Red)).style(Style::new().fg(Color::Blue).bold());
        assert_eq!(line.spans[0].style.fg, Color::Red);
        assert!(line.spans[0].style.modifier.contains(crate::style::Modifier::BOLD));
    }
}
