//! The text interface to a landed rover: landing strings in, single-letter commands, positions
//! out.

use std::fmt::{Display, Write};
use std::str::FromStr;

use crate::position::{InvalidPosition, Position};
use crate::rover::{OutsideSurface, Rover};
use crate::surface::Surface;
use crate::trail::{Map, Trail};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserInputError {
    #[error(transparent)]
    InvalidPosition(#[from] InvalidPosition),

    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    #[error(transparent)]
    OutsideSurface(#[from] OutsideSurface),
}

/// A single rover command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward,
    Backward,
    Right,
    Left,
}

impl TryFrom<char> for Command {
    type Error = UserInputError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'f' => Ok(Command::Forward),
            'b' => Ok(Command::Backward),
            'r' => Ok(Command::Right),
            'l' => Ok(Command::Left),
            other => Err(UserInputError::UnknownCommand(other.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = UserInputError;

    /// Parses exactly one command letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Command::try_from(c),
            _ => Err(UserInputError::UnknownCommand(s.to_owned())),
        }
    }
}

impl From<Command> for char {
    fn from(value: Command) -> Self {
        match value {
            Command::Forward => 'f',
            Command::Backward => 'b',
            Command::Right => 'r',
            Command::Left => 'l',
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char((*self).into())
    }
}

/// A landed rover and the trail it has left so far.
///
/// The trail is only kept on surfaces up to [`Trail::MAX_SIZE`].
#[derive(Debug, Clone)]
pub struct Application {
    rover: Rover,
    trail: Option<Trail>,
}

impl Application {
    /// Lands a rover on the default surface at `input`, e.g. `"3 4 N"`.
    pub fn landing_with(input: &str) -> Result<Self, UserInputError> {
        Application::landing_on(Surface::default(), input)
    }

    /// Lands a rover on `surface` at `input`.
    pub fn landing_on(surface: Surface, input: &str) -> Result<Self, UserInputError> {
        let position: Position = input.parse()?;
        let rover = Rover::on(surface, position)?;

        let mut trail = Trail::new(surface);
        if let Some(trail) = &mut trail {
            trail.insert(position.coordinates());
        } else {
            tracing::debug!("surface too large to keep a trail");
        }

        tracing::info!(%position, size = surface.north_east().horizontal(), "rover landed");
        Ok(Self { rover, trail })
    }

    /// The rover's position as `<horizontal> <vertical> <symbol>`.
    pub fn rover_position(&self) -> String {
        self.rover.position().to_string()
    }

    pub fn rover(&self) -> &Rover {
        &self.rover
    }

    pub fn trail(&self) -> Option<&Trail> {
        self.trail.as_ref()
    }

    /// Executes one command letter; unknown letters leave the rover untouched.
    pub fn execute(&mut self, command: char) -> Result<(), UserInputError> {
        let command = Command::try_from(command)?;
        self.apply(command);
        Ok(())
    }

    /// Executes each letter of `commands` in order, stopping at the first unknown one.
    ///
    /// Commands before the unknown one remain applied.
    pub fn execute_all(&mut self, commands: &str) -> Result<(), UserInputError> {
        for command in commands.chars() {
            self.execute(command)?;
        }
        Ok(())
    }

    /// Applies `command`, returning whether the rover's position changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = match command {
            Command::Forward => self.rover.move_forward(),
            Command::Backward => self.rover.move_backward(),
            Command::Right => {
                self.rover.turn_right();
                true
            }
            Command::Left => {
                self.rover.turn_left();
                true
            }
        };
        if let Some(trail) = &mut self.trail {
            trail.insert(self.rover.position().coordinates());
        }
        tracing::trace!(%command, position = %self.rover.position(), changed);
        changed
    }

    /// A map of the trail, if one is kept for this surface.
    pub fn map(&self) -> Option<Map<'_>> {
        let position = self.rover.position();
        self.trail.as_ref().map(|trail| trail.map(position))
    }
}
