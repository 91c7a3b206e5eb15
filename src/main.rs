//! Land a rover and drive it around from the command line.
//!
//! ```text
//! $ mars-rover "3 4 N" frf
//! 4 5 E
//! ```
//!
//! Without commands, each line on stdin is executed as a sequence of commands and the position is
//! printed after every line. Set `RUST_LOG=debug` to see which moves were blocked by the edge of
//! the surface.

mod options;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mars_rover::Application;

use crate::options::Options;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let options = Options::parse();

    let mut app = Application::landing_on(options.surface(), &options.landing)?;

    if let Some(commands) = &options.commands {
        app.execute_all(commands)?;
        println!("{}", app.rover_position());
    } else {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read commands from stdin")?;
            app.execute_all(line.trim_end())?;
            println!("{}", app.rover_position());
        }
    }

    if options.map {
        match app.map() {
            Some(map) => println!("{map}"),
            None => tracing::warn!("no map kept for a surface of size {}", options.size),
        }
    }

    Ok(())
}
