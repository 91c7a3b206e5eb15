use clap::Parser;

use mars_rover::{Surface, Trail};

/// Land a rover on a square surface and drive it around.
#[derive(Parser, Debug)]
pub struct Options {
    /// Landing position, e.g. "3 4 N".
    #[arg(value_name = "LANDING")]
    pub landing: String,

    /// Commands to execute: `f`orward, `b`ackward, `r`ight, `l`eft.
    ///
    /// If omitted, command sequences are read from stdin, one per line.
    #[arg(value_name = "COMMANDS")]
    pub commands: Option<String>,

    /// Surface spans from `(0, 0)` to `(SIZE, SIZE)`.
    #[arg(
        short,
        long,
        value_name = "SIZE",
        default_value_t = Surface::DEFAULT_SIZE,
        value_parser = clap::value_parser!(u16).range(0..=i64::from(Trail::MAX_SIZE))
    )]
    pub size: u16,

    /// Print a map of the surface and the rover's trail at the end.
    #[arg(long)]
    pub map: bool,
}

impl Options {
    pub fn surface(&self) -> Surface {
        Surface::of_size(self.size)
    }
}
