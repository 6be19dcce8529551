use super::grid::Grid;
use super::route::Move;
use super::train::Train;
use super::{Coord, Direction, GridError, Position};
use log::debug;
use std::iter::FusedIterator;
use std::vec;

/// Train state after one path token, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub train: Train,
    /// The token that produced this frame; `None` for the opening frame.
    pub step: Option<Move>,
}

/// Replays a path one token at a time.
///
/// Yields the train at the start point first and then one frame per token.
/// A step that would leave the map yields `OutOfBounds` and ends the replay.
pub struct Drive {
    size: Coord,
    train: Train,
    moves: vec::IntoIter<Move>,
    started: bool,
    done: bool,
}

impl Drive {
    fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }

    fn apply(&mut self, mv: Move) -> Result<(), GridError> {
        match mv {
            Move::Wait => {
                debug!("Train waiting at {}", self.train.position());
                self.train.set_moving(false);
            }
            Move::Step(dir) => {
                self.train.set_direction(dir);
                let next = self.train.position().step(dir);
                if !self.contains(next) {
                    return Err(GridError::OutOfBounds { x: next.x, y: next.y, size: self.size });
                }
                self.train.set_moving(true);
                self.train.advance()?;
            }
        }
        Ok(())
    }
}

impl Iterator for Drive {
    type Item = Result<Frame, GridError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Ok(Frame { train: self.train.clone(), step: None }));
        }
        let mv = match self.moves.next() {
            Some(mv) => mv,
            None => {
                self.done = true;
                return None;
            }
        };
        match self.apply(mv) {
            Ok(()) => Some(Ok(Frame { train: self.train.clone(), step: Some(mv) })),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Drive {}

impl Grid {
    /// Puts a train on the start point, facing the first direction in
    /// `moves` (RIGHT if there is none), and replays `moves` lazily.
    ///
    /// Fails with `IllegalState` when no start point is placed.
    pub fn drive(&self, moves: &[Move]) -> Result<Drive, GridError> {
        let start = self.start()
            .ok_or_else(|| GridError::IllegalState("no start point placed on the map".to_string()))?;
        let facing = moves.iter()
            .filter_map(|m| match *m {
                Move::Step(d) => Some(d),
                Move::Wait => None,
            })
            .next()
            .unwrap_or(Direction::Right);
        Ok(Drive {
            size: self.size(),
            train: Train::new(start, facing),
            moves: moves.to_vec().into_iter(),
            started: false,
            done: false,
        })
    }
}
