//! A single terminal cell

use crate::style::Style;

/// One terminal cell: a symbol and its style.
///
/// The column to the right of a double-width symbol holds a continuation
/// cell with an empty symbol; it is never printed on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    pub style: Style,
}

impl Cell {
    /// A blank cell (space, default style)
    pub fn empty() -> Self {
        Self {
            symbol: " ".to_string(),
            style: Style::default(),
        }
    }

    pub fn new<S: Into<String>>(symbol: S, style: Style) -> Self {
        Self {
            symbol: symbol.into(),
            style,
        }
    }

    pub(crate) fn continuation() -> Self {
        Self {
            symbol: String::new(),
            style: Style::default(),
        }
    }

    /// True for the trailing half of a wide symbol
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::empty();
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}
