//! Box decoration for text blocks: border, padding and margin
//!
//! A [`Block`] wraps already-laid-out [`Text`] the way a CSS box wraps its
//! content: content is padded to a common width, then padding, then the
//! border, then the margin is applied. Every edge is independent, so a block
//! can draw a single right-hand rule (a separator) or a full rounded frame
//! with a connector glyph on one side where a horizontal rule attaches.

use crate::style::{align, Alignment, Line, Span, Style, Text};

/// Border glyphs, one per edge and corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub top: char,
    pub bottom: char,
    pub left: char,
    pub right: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    /// Replaces `left` on the joint row (see [`Block::joint_row`])
    pub middle_left: Option<char>,
    /// Replaces `right` on the joint row
    pub middle_right: Option<char>,
}

impl Border {
    /// Single line border (─ │ ┌ ┐ └ ┘)
    pub const fn single() -> Self {
        Self {
            top: '─',
            bottom: '─',
            left: '│',
            right: '│',
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            middle_left: None,
            middle_right: None,
        }
    }

    /// Rounded corners (─ │ ╭ ╮ ╰ ╯)
    pub const fn rounded() -> Self {
        Self {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
            ..Self::single()
        }
    }

    /// A border that only defines a right-hand glyph, for separators
    pub const fn right_only(glyph: char) -> Self {
        Self {
            right: glyph,
            ..Self::single()
        }
    }

    pub const fn middle_left(mut self, glyph: char) -> Self {
        self.middle_left = Some(glyph);
        self
    }

    pub const fn middle_right(mut self, glyph: char) -> Self {
        self.middle_right = Some(glyph);
        self
    }
}

/// Which edges of a block are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Sides {
    pub const NONE: Self = Self {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };
    pub const ALL: Self = Self {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };
    pub const RIGHT: Self = Self {
        right: true,
        ..Self::NONE
    };
}

/// Spacing around content, in cells (columns) and lines (rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Spacing {
    /// Left and right only
    pub const fn horizontal(n: u16) -> Self {
        Self {
            top: 0,
            right: n,
            bottom: 0,
            left: n,
        }
    }

    pub const fn right(n: u16) -> Self {
        Self {
            top: 0,
            right: n,
            bottom: 0,
            left: 0,
        }
    }

    /// Total columns added horizontally
    pub const fn width(&self) -> usize {
        self.left as usize + self.right as usize
    }

    /// Total lines added vertically
    pub const fn height(&self) -> usize {
        self.top as usize + self.bottom as usize
    }
}

/// A decorated box around a block of text
#[derive(Debug, Clone, Default)]
pub struct Block {
    border: Option<Border>,
    sides: Sides,
    border_style: Style,
    style: Style,
    padding: Spacing,
    margin: Spacing,
    alignment: Alignment,
}

impl Block {
    /// A block with no decoration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border glyphs and draw all four sides
    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self.sides = Sides::ALL;
        self
    }

    /// Restrict which sides of the border are drawn
    pub fn sides(mut self, sides: Sides) -> Self {
        self.sides = sides;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Style applied under every content span
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Spacing) -> Self {
        self.margin = margin;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn drawn(&self) -> Sides {
        if self.border.is_some() {
            self.sides
        } else {
            Sides::NONE
        }
    }

    /// Columns added around the content by padding, border and margin
    pub fn horizontal_frame(&self) -> usize {
        let sides = self.drawn();
        self.padding.width() + self.margin.width() + sides.left as usize + sides.right as usize
    }

    /// Lines added around the content by padding, border and margin
    pub fn vertical_frame(&self) -> usize {
        let sides = self.drawn();
        self.padding.height() + self.margin.height() + sides.top as usize + sides.bottom as usize
    }

    /// Outer width for content of the given width
    pub fn outer_width(&self, content_width: usize) -> usize {
        content_width + self.horizontal_frame()
    }

    /// Row (in output coordinates) where `middle_left`/`middle_right` glyphs
    /// are drawn: the vertical center of the bordered box, rounding up.
    pub fn joint_row(&self, content_height: usize) -> usize {
        let sides = self.drawn();
        let boxed = content_height
            + self.padding.height()
            + sides.top as usize
            + sides.bottom as usize;
        self.margin.top as usize + boxed.saturating_sub(1) / 2
    }

    /// Decorate `content`, returning the finished block
    pub fn render(&self, content: &Text) -> Text {
        let inner_width = content.width();
        let sides = self.drawn();
        let border = self.border.unwrap_or_else(Border::single);
        let padded_width = inner_width + self.padding.width();
        let joint = self.joint_row(content.height());

        let mut boxed: Vec<Line> = Vec::new();

        let blank = || Line::raw(" ".repeat(padded_width));
        boxed.extend(std::iter::repeat_with(blank).take(self.padding.top as usize));
        for line in &content.lines {
            let mut row = Line::empty();
            row.push(Span::raw(" ".repeat(self.padding.left as usize)));
            row.append(align(line.clone().style(self.style), inner_width, self.alignment));
            row.push(Span::raw(" ".repeat(self.padding.right as usize)));
            boxed.push(row);
        }
        boxed.extend(std::iter::repeat_with(blank).take(self.padding.bottom as usize));

        let horizontal_edge = |fill: char, left: char, right: char| {
            let mut edge = String::new();
            if sides.left {
                edge.push(left);
            }
            edge.extend(std::iter::repeat(fill).take(padded_width));
            if sides.right {
                edge.push(right);
            }
            Line::styled(edge, self.border_style)
        };

        let mut framed: Vec<Line> = Vec::with_capacity(boxed.len() + 2);
        if sides.top {
            framed.push(horizontal_edge(border.top, border.top_left, border.top_right));
        }
        for row in boxed {
            let row_index = self.margin.top as usize + framed.len();
            let mut line = Line::empty();
            if sides.left {
                let glyph = match border.middle_left {
                    Some(g) if row_index == joint => g,
                    _ => border.left,
                };
                line.push(Span::styled(glyph.to_string(), self.border_style));
            }
            line.append(row);
            if sides.right {
                let glyph = match border.middle_right {
                    Some(g) if row_index == joint => g,
                    _ => border.right,
                };
                line.push(Span::styled(glyph.to_string(), self.border_style));
            }
            framed.push(line);
        }
        if sides.bottom {
            framed.push(horizontal_edge(
                border.bottom,
                border.bottom_left,
                border.bottom_right,
            ));
        }

        let mut out = Text::empty();
        out.push_blank(self.margin.top as usize);
        for row in framed {
            let mut line = Line::raw(" ".repeat(self.margin.left as usize));
            line.append(row);
            line.push(Span::raw(" ".repeat(self.margin.right as usize)));
            out.push(line);
        }
        out.push_blank(self.margin.bottom as usize);
        out
    }
}
