//! Coordinates and positions on the surface.

use std::fmt::Display;
use std::str::FromStr;

use crate::direction::Direction;

/// A point on the surface.
///
/// Both components are signed, so a move off the south or west edge yields negative coordinates
/// instead of wrapping; keeping the rover on the surface is up to [`Surface`](crate::Surface).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    horizontal: i64,
    vertical: i64,
}

impl Coordinates {
    pub const fn new(horizontal: i64, vertical: i64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn horizontal(self) -> i64 {
        self.horizontal
    }

    pub fn vertical(self) -> i64 {
        self.vertical
    }

    /// Returns the coordinates one step away from `self` in `direction`.
    ///
    /// Components saturate at `i64::MIN` and `i64::MAX`, far outside any surface.
    #[must_use]
    pub fn moved_in(self, direction: Direction) -> Self {
        let step = direction.step();
        Coordinates {
            horizontal: self.horizontal.saturating_add(step.points_east()),
            vertical: self.vertical.saturating_add(step.points_north()),
        }
    }

    /// Whether either component of `self` is greater than the same component of `other`.
    ///
    /// This is not an order: `(3, 6)` exceeds `(4, 5)` and `(4, 5)` exceeds `(3, 6)`.
    pub fn exceeds(self, other: Coordinates) -> bool {
        self.horizontal > other.horizontal || self.vertical > other.vertical
    }

    /// Whether either component of `self` is smaller than the same component of `other`.
    pub fn precedes(self, other: Coordinates) -> bool {
        other.exceeds(self)
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.horizontal, self.vertical)
    }
}

/// Where a rover is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    direction: Direction,
    coordinates: Coordinates,
}

impl Position {
    pub const fn new(direction: Direction, coordinates: Coordinates) -> Self {
        Self {
            direction,
            coordinates,
        }
    }

    pub fn direction(self) -> Direction {
        self.direction
    }

    pub fn coordinates(self) -> Coordinates {
        self.coordinates
    }

    #[must_use]
    pub fn moved_forward(self) -> Self {
        Position {
            coordinates: self.coordinates.moved_in(self.direction),
            ..self
        }
    }

    #[must_use]
    pub fn moved_backward(self) -> Self {
        Position {
            coordinates: self.coordinates.moved_in(self.direction.opposite()),
            ..self
        }
    }

    #[must_use]
    pub fn turned_right(self) -> Self {
        Position {
            direction: self.direction.next_to_the_right(),
            ..self
        }
    }

    #[must_use]
    pub fn turned_left(self) -> Self {
        Position {
            direction: self.direction.next_to_the_left(),
            ..self
        }
    }
}

/// Formats as `<horizontal> <vertical> <symbol>`, the same format accepted by `parse`.
impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.coordinates.horizontal, self.coordinates.vertical, self.direction
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid position: {0}")]
pub struct InvalidPosition(pub String);

impl FromStr for Position {
    type Err = InvalidPosition;

    /// Parses `<horizontal> <vertical> <symbol>`, with exactly one space between the fields,
    /// non-negative decimal coordinates, and one of `N`, `E`, `S` or `W`.
    ///
    /// Coordinates too large for an `i64` are read as `i64::MAX`, so they are still well formed
    /// and only rejected when checked against a surface.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidPosition(s.to_owned());

        let mut fields = s.split(' ');
        let (Some(horizontal), Some(vertical), Some(symbol), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid());
        };

        let horizontal = parse_component(horizontal).ok_or_else(invalid)?;
        let vertical = parse_component(vertical).ok_or_else(invalid)?;

        let mut symbol = symbol.chars();
        let (Some(symbol), None) = (symbol.next(), symbol.next()) else {
            return Err(invalid());
        };
        if !symbol.is_ascii_uppercase() {
            return Err(invalid());
        }
        let direction = Direction::for_symbol(symbol).map_err(|_| invalid())?;

        Ok(Position::new(
            direction,
            Coordinates::new(horizontal, vertical),
        ))
    }
}

fn parse_component(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only overflow is left once every byte is a digit.
    Some(s.parse().unwrap_or(i64::MAX))
}
