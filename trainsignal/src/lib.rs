//! Train signal system: build a grid rail layout, validate it and route a
//! train across it.

extern crate smallvec;
extern crate regex;
extern crate log;
extern crate failure;
#[macro_use] extern crate failure_derive;

pub mod railway;
pub mod input;
pub mod output;

#[cfg(test)]
mod tests;

pub use railway::grid::Grid;
pub use railway::objects::{ObjectKind, SignalState, TrackObject};
pub use railway::route::{Move, Path};
pub use railway::train::Train;
pub use railway::validate::LayoutFault;
pub use railway::{Direction, GridError, Position};

pub type AppResult<T> = Result<T, failure::Error>;

pub fn read_file(f :&std::path::Path) -> AppResult<String> {
    use std::fs::File;
    use std::io::prelude::*;
    use std::io::BufReader;

    let mut contents = String::new();
    BufReader::new(File::open(f)?).read_to_string(&mut contents)?;
    Ok(contents)
}

use input::command;
pub fn get_commands(s :&std::path::Path) -> AppResult<Vec<command::Command>> {
    let contents = read_file(s)?;
    let commands = command::parse_script(&contents)?;
    Ok(commands)
}
