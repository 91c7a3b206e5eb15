//! Compass headings and the unit steps they point to.

use std::fmt::{Display, Write};

/// A unit displacement on the surface.
///
/// North is up and east is right, so a step north increases the vertical coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    east: i64,
    north: i64,
}

impl Step {
    pub const fn new(east: i64, north: i64) -> Self {
        Self { east, north }
    }

    pub fn points_east(self) -> i64 {
        self.east
    }

    pub fn points_north(self) -> i64 {
        self.north
    }
}

/// One of the four compass headings a rover can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown direction: {0}")]
pub struct UnknownDirection(pub char);

impl Direction {
    /// All headings, in clockwise order starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn north() -> Self {
        Direction::North
    }

    pub const fn east() -> Self {
        Direction::East
    }

    pub const fn south() -> Self {
        Direction::South
    }

    pub const fn west() -> Self {
        Direction::West
    }

    /// Looks up the heading for one of the symbols `N`, `E`, `S` or `W`.
    pub fn for_symbol(symbol: char) -> Result<Self, UnknownDirection> {
        match symbol {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            other => Err(UnknownDirection(other)),
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// The heading after a quarter turn clockwise.
    #[must_use]
    pub fn next_to_the_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// The heading after a quarter turn counterclockwise.
    #[must_use]
    pub fn next_to_the_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    pub fn symbol(self) -> char {
        self.into()
    }

    pub fn step(self) -> Step {
        match self {
            Direction::North => Step::new(0, 1),
            Direction::East => Step::new(1, 0),
            Direction::South => Step::new(0, -1),
            Direction::West => Step::new(-1, 0),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = UnknownDirection;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Direction::for_symbol(value)
    }
}

impl From<Direction> for char {
    fn from(value: Direction) -> Self {
        match value {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char((*self).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_from_symbol() {
        for (symbol, direction) in [
            ('N', Direction::north()),
            ('S', Direction::south()),
            ('E', Direction::east()),
            ('W', Direction::west()),
        ] {
            assert_eq!(Direction::for_symbol(symbol), Ok(direction));
            assert_eq!(direction.symbol(), symbol);
        }
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = Direction::for_symbol('X').unwrap_err();
        assert_eq!(err, UnknownDirection('X'));
        assert_eq!(err.to_string(), "Unknown direction: X");

        assert!(Direction::try_from('n').is_err());
    }

    #[test]
    fn four_turns_return_to_the_same_heading() {
        for direction in Direction::ALL {
            let right = direction
                .next_to_the_right()
                .next_to_the_right()
                .next_to_the_right()
                .next_to_the_right();
            let left = direction
                .next_to_the_left()
                .next_to_the_left()
                .next_to_the_left()
                .next_to_the_left();
            assert_eq!(right, direction);
            assert_eq!(left, direction);
        }
    }

    #[test]
    fn turns_follow_the_compass() {
        assert_eq!(Direction::North.next_to_the_right(), Direction::East);
        assert_eq!(Direction::East.next_to_the_right(), Direction::South);
        assert_eq!(Direction::South.next_to_the_right(), Direction::West);
        assert_eq!(Direction::West.next_to_the_right(), Direction::North);

        for direction in Direction::ALL {
            assert_eq!(direction.next_to_the_right().next_to_the_left(), direction);
            assert_eq!(
                direction.next_to_the_right().next_to_the_right(),
                direction.opposite()
            );
        }
    }

    #[test]
    fn opposite_twice_is_identity() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn steps_are_north_up_and_east_right() {
        assert_eq!(Direction::North.step(), Step::new(0, 1));
        assert_eq!(Direction::South.step(), Step::new(0, -1));
        assert_eq!(Direction::East.step(), Step::new(1, 0));
        assert_eq!(Direction::West.step(), Step::new(-1, 0));

        for direction in Direction::ALL {
            let (step, back) = (direction.step(), direction.opposite().step());
            assert_eq!(step.points_east() + back.points_east(), 0);
            assert_eq!(step.points_north() + back.points_north(), 0);
        }
    }
}
