//! Style combining foreground, background, and modifiers

use super::{Color, Modifier};
use crossterm::style::ContentStyle;

/// A complete style with foreground, background, and modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            modifier: Modifier::NONE,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    pub const fn bold(mut self) -> Self {
        self.modifier = self.modifier.union(Modifier::BOLD);
        self
    }

    pub const fn dim(mut self) -> Self {
        self.modifier = self.modifier.union(Modifier::DIM);
        self
    }

    pub const fn italic(mut self) -> Self {
        self.modifier = self.modifier.union(Modifier::ITALIC);
        self
    }

    /// Combine this style with another, with other taking precedence
    /// for non-default values
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: if other.fg == Color::Reset {
                self.fg
            } else {
                other.fg
            },
            bg: if other.bg == Color::Reset {
                self.bg
            } else {
                other.bg
            },
            modifier: self.modifier | other.modifier,
        }
    }

    /// Whether applying this style would emit any escape sequence
    pub fn is_plain(&self) -> bool {
        self.fg == Color::Reset && self.bg == Color::Reset && self.modifier.is_empty()
    }

    /// Convert to crossterm's content style. `Reset` colors become "unset".
    pub fn to_content_style(&self) -> ContentStyle {
        let unset = |c: Color| (c != Color::Reset).then(|| c.into());
        ContentStyle {
            foreground_color: unset(self.fg),
            background_color: unset(self.bg),
            underline_color: None,
            attributes: self.modifier.to_attributes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_patch() {
        let base = Style::new().fg(Color::Red).bold();
        let combined = base.patch(Style::new().fg(Color::Blue));
        assert_eq!(combined.fg, Color::Blue);
        assert!(combined.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_style_patch_reset_preserved() {
        let base = Style::new().fg(Color::Red);
        assert_eq!(base.patch(Style::new()).fg, Color::Red);
    }

    #[test]
    fn test_plain_style_has_no_colors() {
        assert!(Style::new().is_plain());
        let content = Style::new().to_content_style();
        assert!(content.foreground_color.is_none());
        assert!(!Style::new().dim().is_plain());
    }
}
