//! Splitting an area along one axis

use super::Constraint;
use crate::geometry::Rect;

/// Axis along which a [`Layout`] splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
}

/// Splits a rectangle into consecutive regions.
///
/// Non-fill constraints are resolved first, in order, each clamped to what
/// is still unallocated, so earlier regions win when space runs out. Fill
/// regions then share the remainder by weight, the last one absorbing
/// rounding.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    direction: Direction,
    constraints: Vec<Constraint>,
}

impl Layout {
    pub fn vertical<I: IntoIterator<Item = Constraint>>(constraints: I) -> Self {
        Self {
            direction: Direction::Vertical,
            constraints: constraints.into_iter().collect(),
        }
    }

    pub fn horizontal<I: IntoIterator<Item = Constraint>>(constraints: I) -> Self {
        Self {
            direction: Direction::Horizontal,
            constraints: constraints.into_iter().collect(),
        }
    }

    /// One rectangle per constraint, in order; empty regions are kept
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        let available = match self.direction {
            Direction::Horizontal => area.width,
            Direction::Vertical => area.height,
        };

        let mut sizes = vec![0u16; self.constraints.len()];
        let mut remaining = available;
        let mut total_weight = 0u32;
        for (size, constraint) in sizes.iter_mut().zip(&self.constraints) {
            match constraint.resolve(available, remaining) {
                Some(n) => {
                    *size = n;
                    remaining -= n;
                }
                None => total_weight += constraint.fill_weight() as u32,
            }
        }

        if total_weight > 0 {
            let mut distributed = 0u16;
            let mut last_fill = None;
            for (i, constraint) in self.constraints.iter().enumerate() {
                if let Constraint::Fill(weight) = constraint {
                    let share = (remaining as u32 * *weight as u32 / total_weight) as u16;
                    sizes[i] = share;
                    distributed += share;
                    last_fill = Some(i);
                }
            }
            if let Some(i) = last_fill {
                sizes[i] += remaining - distributed;
            }
        }

        let mut offset = 0u16;
        sizes
            .into_iter()
            .map(|size| {
                let rect = match self.direction {
                    Direction::Horizontal => {
                        Rect::new(area.x + offset, area.y, size, area.height)
                    }
                    Direction::Vertical => Rect::new(area.x, area.y + offset, area.width, size),
                };
                offset += size;
                rect
            })
            .collect()
    }
}
