//! The rover and the rules that keep it on its surface.

use crate::position::{Coordinates, Position};
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Rover outside surface: {coordinates}")]
pub struct OutsideSurface {
    pub coordinates: Coordinates,
}

/// A rover that always stays on its surface.
///
/// Moves that would take the rover off the surface are ignored: the rover stays where it is and
/// no error is raised. The move methods return whether the rover actually moved, for callers that
/// care.
#[derive(Debug, Clone)]
pub struct Rover {
    surface: Surface,
    position: Position,
}

impl Rover {
    /// Lands a rover at `position` on the default surface.
    pub fn new(position: Position) -> Result<Self, OutsideSurface> {
        Rover::on(Surface::default(), position)
    }

    /// Lands a rover at `position` on `surface`.
    pub fn on(surface: Surface, position: Position) -> Result<Self, OutsideSurface> {
        if !surface.contains(position.coordinates()) {
            return Err(OutsideSurface {
                coordinates: position.coordinates(),
            });
        }
        Ok(Self { surface, position })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn move_forward(&mut self) -> bool {
        self.move_to(self.position.moved_forward())
    }

    pub fn move_backward(&mut self) -> bool {
        self.move_to(self.position.moved_backward())
    }

    pub fn turn_right(&mut self) {
        self.position = self.position.turned_right();
    }

    pub fn turn_left(&mut self) {
        self.position = self.position.turned_left();
    }

    fn move_to(&mut self, candidate: Position) -> bool {
        if !self.surface.contains(candidate.coordinates()) {
            tracing::debug!(
                from = %self.position,
                blocked = %candidate.coordinates(),
                "move would leave the surface"
            );
            return false;
        }
        self.position = candidate;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    fn rover_at(x: i64, y: i64, direction: Direction) -> Rover {
        Rover::new(Position::new(direction, Coordinates::new(x, y))).unwrap()
    }

    #[test]
    fn cannot_land_outside_the_surface() {
        let err = Rover::new(Position::new(Direction::North, Coordinates::new(6, 3))).unwrap_err();
        assert_eq!(
            err,
            OutsideSurface {
                coordinates: Coordinates::new(6, 3)
            }
        );
        assert_eq!(err.to_string(), "Rover outside surface: (6, 3)");

        let small = Surface::of_size(2);
        assert!(Rover::on(small, Position::new(Direction::East, Coordinates::new(3, 0))).is_err());
        assert!(Rover::on(small, Position::new(Direction::East, Coordinates::new(2, 2))).is_ok());
    }

    #[test]
    fn moves_and_turns() {
        let mut rover = rover_at(3, 4, Direction::North);

        assert!(rover.move_forward());
        assert_eq!(
            rover.position(),
            Position::new(Direction::North, Coordinates::new(3, 5))
        );

        rover.turn_right();
        assert_eq!(
            rover.position(),
            Position::new(Direction::East, Coordinates::new(3, 5))
        );

        assert!(rover.move_forward());
        assert_eq!(rover.position().coordinates(), Coordinates::new(4, 5));

        assert!(rover.move_backward());
        rover.turn_left();
        rover.turn_left();
        assert_eq!(
            rover.position(),
            Position::new(Direction::West, Coordinates::new(3, 5))
        );
    }

    #[test]
    fn stays_put_when_facing_out_of_any_edge() {
        for (x, y, direction) in [
            (5, 5, Direction::North),
            (5, 5, Direction::East),
            (0, 0, Direction::South),
            (0, 0, Direction::West),
            (3, 0, Direction::South),
            (0, 3, Direction::West),
        ] {
            let mut rover = rover_at(x, y, direction);
            let before = rover.position();
            assert!(!rover.move_forward());
            assert_eq!(rover.position(), before);
        }
    }

    #[test]
    fn stays_put_when_backing_out_of_an_edge() {
        let mut rover = rover_at(2, 0, Direction::North);
        assert!(!rover.move_backward());
        assert_eq!(rover.position().coordinates(), Coordinates::new(2, 0));

        assert!(rover.move_forward());
        assert!(rover.move_backward());
        assert_eq!(rover.position().coordinates(), Coordinates::new(2, 0));
    }
}
