//! Text attributes (bold, italic, underline, ...)

use crossterm::style::{Attribute, Attributes};
use std::ops::{BitOr, BitOrAssign};

/// Text attributes as a bitfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifier(u8);

impl Modifier {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const DIM: Self = Self(1 << 1);
    pub const ITALIC: Self = Self(1 << 2);
    pub const UNDERLINED: Self = Self(1 << 3);
    /// Swap foreground and background
    pub const REVERSED: Self = Self(1 << 4);

    const TABLE: [(Self, Attribute); 5] = [
        (Self::BOLD, Attribute::Bold),
        (Self::DIM, Attribute::Dim),
        (Self::ITALIC, Attribute::Italic),
        (Self::UNDERLINED, Attribute::Underlined),
        (Self::REVERSED, Attribute::Reverse),
    ];

    pub const fn empty() -> Self {
        Self::NONE
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Crossterm attributes for this modifier, in a fixed order
    pub fn attributes(&self) -> Vec<Attribute> {
        Self::TABLE
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, attr)| *attr)
            .collect()
    }

    /// The same attributes packed into crossterm's set type
    pub fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::default();
        for attr in self.attributes() {
            attrs.set(attr);
        }
        attrs
    }
}

impl BitOr for Modifier {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Modifier {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}
