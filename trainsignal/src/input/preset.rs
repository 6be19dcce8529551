use crate::railway::grid::Grid;
use crate::railway::{Coord, GridError};
use log::info;

enum Piece {
    Start,
    End,
    Track,
    Signal(&'static str),
    Junction(&'static str),
}

use self::Piece::*;

/// Sample network on a 10 x 10 map. It validates, but its junction settings
/// lead the train into a dead end.
const SAMPLE: &[(Coord, Coord, Piece)] = &[
    (1, 1, Start),
    (2, 1, Track),
    (3, 1, Junction("DOWN")),
    (4, 1, Track),
    (5, 1, Track),
    (5, 2, Track),
    (5, 3, Junction("RIGHT")),
    (5, 4, Track),
    (5, 5, Junction("DOWN")),
    (5, 6, Track),
    (5, 7, Junction("UP")),
    (5, 8, Track),
    (6, 8, Track),
    (7, 8, Track),
    (6, 3, Track),
    (7, 3, Track),
    (8, 3, Signal("RED")),
    (9, 3, Track),
    (9, 4, Track),
    (9, 5, Junction("UP")),
    (8, 5, Track),
    (7, 5, Track),
    (6, 5, Track),
    (1, 2, Track),
    (3, 2, Track),
    (3, 3, Signal("GREEN")),
    (2, 3, Track),
    (1, 3, Junction("DOWN")),
    (1, 4, Track),
    (1, 5, Signal("RED")),
    (1, 6, Track),
    (1, 7, Track),
    (2, 7, Track),
    (3, 7, Signal("GREEN")),
    (4, 7, Track),
    (9, 6, Track),
    (9, 7, Signal("RED")),
    (9, 8, Track),
    (8, 8, End),
];

impl Grid {
    /// Replaces the current layout with the sample network.
    ///
    /// Needs a map of at least 10 x 10; on a smaller one this fails with
    /// `OutOfBounds` before anything is cleared.
    pub fn load_preset(&mut self) -> Result<(), GridError> {
        for &(x, y, _) in SAMPLE {
            self.check(x, y)?;
        }
        self.clear();
        for &(x, y, ref piece) in SAMPLE {
            match *piece {
                Start => self.place_start(x, y)?,
                End => self.place_end(x, y)?,
                Track => self.place_track(x, y)?,
                Signal(state) => self.place_signal(x, y, state)?,
                Junction(direction) => self.place_junction(x, y, direction)?,
            }
        }
        info!("Preset map loaded with {} objects", SAMPLE.len());
        Ok(())
    }
}
