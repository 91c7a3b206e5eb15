//! Drive a rover around a bounded 2-D surface.
//!
//! # Overview
//!
//! A rover lands on a square surface that spans from `(0, 0)` in the south-west corner to
//! `(size, size)` in the north-east corner, edges included. It faces one of the four compass
//! directions and accepts four commands: move `f`orward, move `b`ackward, turn `r`ight and turn
//! `l`eft.
//!
//! The surface is a hard boundary. A rover can't land outside of it, and a move that would leave
//! it is silently ignored: the rover stays where it was, still facing the same way. Turning never
//! changes the coordinates, so it always succeeds.
//!
//! Positions are read and written as `<horizontal> <vertical> <direction>`, for example `3 4 N`.
//! North increases the vertical coordinate and east increases the horizontal one.
//!
//! ```
//! use mars_rover::Application;
//!
//! let mut app = Application::landing_with("3 4 N")?;
//! app.execute_all("frf")?;
//! assert_eq!(app.rover_position(), "4 5 E");
//!
//! // The second move would cross the east edge, so only the first one happens.
//! app.execute_all("ff")?;
//! assert_eq!(app.rover_position(), "5 5 E");
//! # Ok::<(), mars_rover::UserInputError>(())
//! ```
//!
//! # Implementation notes
//!
//! Every type except [`Rover`] and [`Application`] is a small `Copy` value, and the derived
//! positions ([`Position::moved_forward`] and friends) never touch the surface. Bounds are only
//! checked by the rover, right before it commits to a new position, so there is a single place
//! that decides whether a move is allowed.

mod application;
mod direction;
mod position;
mod rover;
mod surface;
mod trail;

pub use crate::application::{Application, Command, UserInputError};
pub use crate::direction::{Direction, Step, UnknownDirection};
pub use crate::position::{Coordinates, InvalidPosition, Position};
pub use crate::rover::{OutsideSurface, Rover};
pub use crate::surface::Surface;
pub use crate::trail::{Map, Trail};
