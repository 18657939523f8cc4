//! World positions and tile distances.

use std::fmt;

/// A world tile: column, row, and plane (floor level).
///
/// Distances are Chebyshev ("king move") distances and are only defined
/// between tiles on the same plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Plane. Tiles on different planes are never "near" each other.
    pub plane: i32,
}

impl Tile {
    /// Construct a tile.
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    /// Chebyshev distance to `other`, or `None` if the planes differ.
    pub fn chebyshev(&self, other: &Tile) -> Option<u32> {
        if self.plane != other.plane {
            return None;
        }
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        Some(dx.max(dy))
    }

    /// Whether `other` is on the same plane and at most `radius` tiles away.
    pub fn within(&self, other: &Tile, radius: u32) -> bool {
        self.chebyshev(other).is_some_and(|d| d <= radius)
    }

    /// Whether moving from `self` to `next` looks like a teleport: a plane
    /// change, or a jump of more than `threshold` tiles along either axis.
    pub fn jumped_to(&self, next: &Tile, threshold: u32) -> bool {
        match self.chebyshev(next) {
            None => true,
            Some(d) => d > threshold,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn chebyshev_takes_the_larger_axis() {
        let a = Tile::new(10, 10, 0);
        assert_eq!(a.chebyshev(&Tile::new(13, 8, 0)), Some(3));
        assert_eq!(a.chebyshev(&Tile::new(10, 10, 0)), Some(0));
    }

    #[test]
    fn different_planes_have_no_distance() {
        let a = Tile::new(10, 10, 0);
        let b = Tile::new(10, 10, 1);
        assert_eq!(a.chebyshev(&b), None);
        assert!(!a.within(&b, 100));
    }

    #[test]
    fn within_is_inclusive() {
        let patch = Tile::new(2670, 3374, 0);
        assert!(patch.within(&Tile::new(2675, 3370, 0), 5));
        assert!(!patch.within(&Tile::new(2676, 3374, 0), 5));
    }

    #[test]
    fn jump_detection_uses_strict_threshold() {
        let a = Tile::new(0, 0, 0);
        assert!(!a.jumped_to(&Tile::new(20, 0, 0), 20));
        assert!(a.jumped_to(&Tile::new(21, 0, 0), 20));
        assert!(a.jumped_to(&Tile::new(0, -25, 0), 20));
        assert!(a.jumped_to(&Tile::new(1, 1, 1), 20));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = Tile::new(i32::MIN, 0, 0);
        let b = Tile::new(i32::MAX, 0, 0);
        assert_eq!(a.chebyshev(&b), Some(u32::MAX));
    }

    proptest! {
        #[test]
        fn chebyshev_is_symmetric(
            x1 in -5000i32..5000, y1 in -5000i32..5000,
            x2 in -5000i32..5000, y2 in -5000i32..5000,
        ) {
            let a = Tile::new(x1, y1, 0);
            let b = Tile::new(x2, y2, 0);
            prop_assert_eq!(a.chebyshev(&b), b.chebyshev(&a));
        }
    }
}
