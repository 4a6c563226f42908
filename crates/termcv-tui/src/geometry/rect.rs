//! Screen regions

use super::Size;

/// A region of cells; `x`/`y` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin covering `size`
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge x coordinate (exclusive)
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge y coordinate (exclusive)
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// True when the cell at (`x`, `y`) lies inside the region
    pub fn contains(&self, x: u16, y: u16) -> bool {
        (self.x..self.right()).contains(&x) && (self.y..self.bottom()).contains(&y)
    }

    /// Split at a row offset into (top, bottom); `at` is clamped to the height
    pub fn split_vertical(&self, at: u16) -> (Self, Self) {
        let at = at.min(self.height);
        (
            Self::new(self.x, self.y, self.width, at),
            Self::new(
                self.x,
                self.y.saturating_add(at),
                self.width,
                self.height - at,
            ),
        )
    }

    pub fn intersect(&self, other: &Rect) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x >= right || y >= bottom {
            Self::default()
        } else {
            Self::new(x, y, right - x, bottom - y)
        }
    }

    /// Iterate the y coordinate of every row
    pub fn rows(&self) -> impl Iterator<Item = u16> {
        self.y..self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_area() {
        let r = Rect::new(2, 1, 40, 12);
        assert_eq!((r.right(), r.bottom()), (42, 13));
        assert_eq!(r.area(), 480);
        assert_eq!(r.size(), Size::new(40, 12));
        assert!(Rect::new(0, 0, 0, 5).is_empty());
    }

    #[test]
    fn test_contains_excludes_far_edges() {
        let r = Rect::new(2, 1, 40, 12);
        assert!(r.contains(2, 1));
        assert!(r.contains(41, 12));
        assert!(!r.contains(42, 1));
        assert!(!r.contains(2, 13));
        assert!(!r.contains(1, 1));
        assert!(!Rect::new(3, 3, 0, 0).contains(3, 3));
    }

    #[test]
    fn test_split_vertical_clamps() {
        let r = Rect::new(0, 0, 40, 10);
        let (top, bottom) = r.split_vertical(4);
        assert_eq!(top, Rect::new(0, 0, 40, 4));
        assert_eq!(bottom, Rect::new(0, 4, 40, 6));

        let (top, bottom) = r.split_vertical(50);
        assert_eq!(top.height, 10);
        assert!(bottom.is_empty());
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 10, 5, 5);
        assert!(a.intersect(&b).is_empty());
        assert_eq!(
            a.intersect(&Rect::new(2, 2, 10, 10)),
            Rect::new(2, 2, 3, 3)
        );
    }

    #[test]
    fn test_rows() {
        let rows: Vec<u16> = Rect::new(0, 3, 10, 2).rows().collect();
        assert_eq!(rows, vec![3, 4]);
    }
}
