//! A record of the cells a rover has occupied.

use std::fmt::{Display, Write};

use bit_vec::BitVec;

use crate::position::{Coordinates, Position};
use crate::surface::Surface;

/// One bit per cell of a surface, set once the rover has been there.
#[derive(Debug, Clone)]
pub struct Trail {
    side: i64,
    raw: BitVec,
}

impl Trail {
    /// The largest surface size a trail is kept for.
    pub const MAX_SIZE: u16 = 1000;

    /// Creates an empty trail covering every cell of `surface`, or `None` if the surface is
    /// larger than [`Trail::MAX_SIZE`].
    pub fn new(surface: Surface) -> Option<Self> {
        let side = surface.north_east().horizontal() + 1;
        if side > i64::from(Trail::MAX_SIZE) + 1 {
            return None;
        }
        let w = usize::try_from(side).ok()?;
        let raw = BitVec::from_elem(w.checked_mul(w)?, false);
        Some(Self { side, raw })
    }

    /// Marks `coordinates` as visited; coordinates off the surface are ignored.
    #[inline]
    pub fn insert(&mut self, coordinates: Coordinates) {
        if let Some(offset) = self.offset(coordinates) {
            self.raw.set(offset, true);
        }
    }

    #[inline]
    pub fn contains(&self, coordinates: Coordinates) -> bool {
        if let Some(offset) = self.offset(coordinates) {
            self.raw[offset]
        } else {
            false
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.none()
    }

    /// Number of distinct cells visited.
    pub fn len(&self) -> usize {
        self.raw.iter().filter(|&visited| visited).count()
    }

    /// A printable map of the trail with the rover at `rover`.
    pub fn map(&self, rover: Position) -> Map<'_> {
        Map { trail: self, rover }
    }

    #[inline]
    fn offset(&self, coordinates: Coordinates) -> Option<usize> {
        let (x, y) = (coordinates.horizontal(), coordinates.vertical());
        if !(0..self.side).contains(&x) || !(0..self.side).contains(&y) {
            return None;
        }
        let (x, y, w): (usize, usize, usize) = (x as _, y as _, self.side as _);
        Some(y * w + x)
    }
}

/// The surface drawn north-up: `.` for unvisited cells, `*` for visited ones, and the rover's
/// direction symbol where it currently is.
#[derive(Debug)]
pub struct Map<'a> {
    trail: &'a Trail,
    rover: Position,
}

impl Display for Map<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = self.trail.side;
        for y in (0..side).rev() {
            for x in 0..side {
                if x != 0 {
                    f.write_char(' ')?;
                }
                let here = Coordinates::new(x, y);
                let cell = if here == self.rover.coordinates() {
                    self.rover.direction().symbol()
                } else if self.trail.contains(here) {
                    '*'
                } else {
                    '.'
                };
                f.write_char(cell)?;
            }
            if y != 0 {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}
