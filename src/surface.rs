//! The bounded region a rover drives on.

use crate::position::Coordinates;

/// A closed square from `(0, 0)` to `(size, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    south_west: Coordinates,
    north_east: Coordinates,
}

impl Surface {
    /// The size of the surface rovers land on unless told otherwise.
    pub const DEFAULT_SIZE: u16 = 5;

    pub fn of_size(size: u16) -> Self {
        let size = i64::from(size);
        Self {
            south_west: Coordinates::new(0, 0),
            north_east: Coordinates::new(size, size),
        }
    }

    pub fn south_west(&self) -> Coordinates {
        self.south_west
    }

    pub fn north_east(&self) -> Coordinates {
        self.north_east
    }

    /// Whether `coordinates` lies on the surface, edges included.
    pub fn contains(&self, coordinates: Coordinates) -> bool {
        !(coordinates.exceeds(self.north_east) || coordinates.precedes(self.south_west))
    }
}

impl Default for Surface {
    fn default() -> Self {
        Surface::of_size(Surface::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_corners_and_edges() {
        let surface = Surface::of_size(5);
        for (x, y) in [(0, 0), (5, 5), (0, 5), (5, 0), (3, 0), (0, 3), (2, 4)] {
            assert!(surface.contains(Coordinates::new(x, y)), "({x}, {y})");
        }
    }

    #[test]
    fn does_not_contain_outside_points() {
        let surface = Surface::of_size(5);
        for (x, y) in [(6, 3), (3, 6), (6, 6), (-1, 0), (0, -1), (-1, 6), (3, -4)] {
            assert!(!surface.contains(Coordinates::new(x, y)), "({x}, {y})");
        }
    }

    #[test]
    fn matches_componentwise_bounds() {
        let surface = Surface::of_size(3);
        for x in -2..=5 {
            for y in -2..=5 {
                let expected = (0..=3).contains(&x) && (0..=3).contains(&y);
                assert_eq!(surface.contains(Coordinates::new(x, y)), expected);
            }
        }
    }

    #[test]
    fn empty_size_has_a_single_cell() {
        let surface = Surface::of_size(0);
        assert!(surface.contains(Coordinates::new(0, 0)));
        assert!(!surface.contains(Coordinates::new(1, 0)));
        assert_eq!(Surface::default(), Surface::of_size(5));
    }
}
