//! Size constraints for layout

/// How much of the split axis a region takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Exactly this many cells, or whatever remains if less
    Fixed(u16),
    /// Percentage of the whole axis (0-100)
    Percentage(u16),
    /// Share of the space left after non-fill regions, by weight
    Fill(u16),
}

impl Constraint {
    /// Size taken from `available`, given `remaining` unallocated cells.
    /// `None` for fill regions, which are sized in a second pass.
    pub(crate) fn resolve(&self, available: u16, remaining: u16) -> Option<u16> {
        match *self {
            Self::Fixed(n) => Some(n.min(remaining)),
            Self::Percentage(p) => {
                let size = (available as u32 * p.min(100) as u32 / 100) as u16;
                Some(size.min(remaining))
            }
            Self::Fill(_) => None,
        }
    }

    pub(crate) fn fill_weight(&self) -> u16 {
        match *self {
            Self::Fill(w) => w,
            _ => 0,
        }
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::Fill(1)
    }
}
