//! Display-width aware wrapping and alignment

use super::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Horizontal alignment inside a fixed-width cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Width of a string in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Word-wrap text to fit within `max_width` cells.
///
/// Existing line breaks are kept as hard breaks (blank lines survive), words
/// are packed greedily and joined by a single space, and a word wider than
/// the line is split at character boundaries. Empty input yields no lines.
/// A zero width is treated as one cell.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut result = Vec::new();

    for hard_line in text.lines() {
        let mut current_line = String::new();
        let mut current_width = 0usize;
        let start = result.len();

        for word in hard_line.split_whitespace() {
            let word_width = display_width(word);

            if current_width > 0 && current_width + 1 + word_width <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                result.push(std::mem::take(&mut current_line));
                current_width = 0;
            }

            if word_width <= max_width {
                current_line.push_str(word);
                current_width = word_width;
            } else {
                // Word too long, break it
                for c in word.chars() {
                    let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
                    if current_width + char_width > max_width && current_width > 0 {
                        result.push(std::mem::take(&mut current_line));
                        current_width = 0;
                    }
                    current_line.push(c);
                    current_width += char_width;
                }
            }
        }

        if !current_line.is_empty() || result.len() == start {
            result.push(current_line);
        }
    }

    result
}

/// Pad a line with spaces to exactly `width` cells using the given alignment.
///
/// Lines already at or beyond `width` are returned unchanged; callers wrap
/// before aligning.
pub fn align(mut line: Line, width: usize, alignment: Alignment) -> Line {
    let gap = width.saturating_sub(line.width());
    if gap == 0 {
        return line;
    }

    let (left, right) = match alignment {
        Alignment::Left => (0, gap),
        Alignment::Right => (gap, 0),
        Alignment::Center => (gap / 2, gap - gap / 2),
    };

    if left > 0 {
        line.spans.insert(0, Span::raw(" ".repeat(left)));
    }
    if right > 0 {
        line.spans.push(Span::raw(" ".repeat(right)));
    }
    line
}
