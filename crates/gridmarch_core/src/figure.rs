//! Figures, groups and movement directions

use crate::color::Rgb;

/// The three shapes a figure can take
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Ellipse,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    /// All shape kinds in sampling order
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Ellipse, ShapeKind::Rectangle, ShapeKind::Triangle];

    /// Look up a shape kind by its sampling index (0, 1 or 2)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Sampling index of this shape kind
    pub fn index(self) -> usize {
        match self {
            ShapeKind::Ellipse => 0,
            ShapeKind::Rectangle => 1,
            ShapeKind::Triangle => 2,
        }
    }
}

/// A grid-aligned movement direction
///
/// Both components are in {-1, 0, 1} and at least one is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    dx: i32,
    dy: i32,
}

impl Direction {
    /// Create a direction, rejecting (0, 0) and components outside {-1, 0, 1}
    pub fn new(dx: i32, dy: i32) -> Option<Self> {
        let in_range = |c: i32| (-1..=1).contains(&c);
        if (dx == 0 && dy == 0) || !in_range(dx) || !in_range(dy) {
            None
        } else {
            Some(Self { dx, dy })
        }
    }

    #[inline]
    pub fn dx(&self) -> i32 {
        self.dx
    }

    #[inline]
    pub fn dy(&self) -> i32 {
        self.dy
    }
}

/// A single positioned shape
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Figure {
    /// Horizontal position in canvas pixels
    pub x: i32,
    /// Vertical position in canvas pixels
    pub y: i32,
    kind: ShapeKind,
}

impl Figure {
    /// Create a figure at a lattice position
    pub fn new(x: i32, y: i32, kind: ShapeKind) -> Self {
        Self { x, y, kind }
    }

    /// Shape of this figure (fixed for its lifetime)
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }
}

/// A set of figures sharing one color and one direction
///
/// Membership is fixed once the group is built; only positions change.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    figures: Vec<Figure>,
    color: Rgb,
    direction: Direction,
}

impl Group {
    /// Create a group from its figures
    pub fn new(figures: Vec<Figure>, color: Rgb, direction: Direction) -> Self {
        Self {
            figures,
            color,
            direction,
        }
    }

    /// Shared fill color
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Shared movement direction
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// All figures in stable order
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Mutable access to figure positions
    ///
    /// Returns a slice so figures can be moved but not added or removed.
    pub fn figures_mut(&mut self) -> &mut [Figure] {
        &mut self.figures
    }

    /// Number of figures in the group
    #[inline]
    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    /// Check if the group has no figures
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_rejects_zero() {
        assert!(Direction::new(0, 0).is_none());
    }

    #[test]
    fn test_direction_rejects_out_of_range() {
        assert!(Direction::new(2, 0).is_none());
        assert!(Direction::new(0, -2).is_none());
    }

    #[test]
    fn test_direction_accepts_all_nonzero_unit_vectors() {
        let mut count = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(dir) = Direction::new(dx, dy) {
                    assert_eq!((dir.dx(), dir.dy()), (dx, dy));
                    count += 1;
                }
            }
        }
        assert_eq!(count, 8);
    }

    #[test]
    fn test_shape_kind_index_roundtrip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(ShapeKind::from_index(3), None);
    }

    #[test]
    fn test_group_accessors() {
        let dir = Direction::new(1, 0).unwrap();
        let mut group = Group::new(
            vec![Figure::new(0, 0, ShapeKind::Triangle)],
            Rgb::WHITE,
            dir,
        );
        assert_eq!(group.figure_count(), 1);
        assert!(!group.is_empty());
        group.figures_mut()[0].x = 42;
        assert_eq!(group.figures()[0].x, 42);
        assert_eq!(group.figures()[0].kind(), ShapeKind::Triangle);
        assert_eq!(group.direction(), dir);
        assert_eq!(group.color(), Rgb::WHITE);
    }
}
