use super::grid::Grid;
use super::objects::{SignalState, TrackObject};
use super::{Direction, Position, DIRECTIONS};
use log::{info, trace};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

/// Token rendered for a signal wait.
pub const WAIT_MARKER: &str = "WAIT";

/// One token of a train path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Move {
    /// Move one cell in the given direction.
    Step(Direction),
    /// Hold in place while a red signal turns green.
    Wait,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Move::Step(d) => write!(f, "{}", d.name()),
            Move::Wait => write!(f, "{}", WAIT_MARKER),
        }
    }
}

/// A successful traversal from the start point to the end point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    pub moves: Vec<Move>,
    /// Signals turned from red to green while searching, in toggle order.
    pub toggled: SmallVec<[Position; 4]>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.moves.iter().map(|m| m.to_string()).collect()
    }

    /// Where the path ends up when replayed from `from`.
    pub fn destination(&self, from: Position) -> Position {
        self.moves.iter().fold(from, |p, m| match *m {
            Move::Step(d) => p.step(d),
            Move::Wait => p,
        })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tokens().join(" "))
    }
}

impl Grid {
    /// Breadth-first search from the start point to the end point.
    ///
    /// Neighbors are explored UP, DOWN, LEFT, RIGHT and a cell is marked
    /// visited when it is enqueued. A junction only lets the search continue
    /// along its configured direction. A red signal is switched to green on
    /// the grid itself and its cell is queued once more behind a `Wait`
    /// token; that re-queue bypasses the visited flag.
    ///
    /// Returns `None` when start or end is unset or the end is unreachable.
    /// Signals toggled before the search gave up stay green.
    pub fn find_path(&mut self) -> Option<Path> {
        let (start, end) = match (self.start(), self.end()) {
            (Some(s), Some(e)) => (s, e),
            _ => return None,
        };

        let size = self.size() as usize;
        let index = |p: Position| p.y as usize * size + p.x as usize;
        let mut visited = vec![false; size * size];
        let mut toggled = SmallVec::new();
        let mut queue: VecDeque<(Position, Vec<Move>)> = VecDeque::new();

        visited[index(start)] = true;
        queue.push_back((start, Vec::new()));

        while let Some((node, path)) = queue.pop_front() {
            trace!("Visiting {} after {} moves", node, path.len());
            if node == end {
                info!("Path found from {} to {} in {} moves", start, end, path.len());
                return Some(Path { moves: path, toggled: toggled });
            }

            let forced = match self.cell_mut(node) {
                Some(TrackObject::Signal { state, .. }) if *state == SignalState::Red => {
                    *state = SignalState::Green;
                    toggled.push(node);
                    let mut waiting = path;
                    waiting.push(Move::Wait);
                    queue.push_back((node, waiting));
                    continue;
                }
                Some(TrackObject::Junction { direction, .. }) => Some(*direction),
                _ => None,
            };

            let candidates: SmallVec<[Direction; 4]> = match forced {
                Some(d) => SmallVec::from_slice(&[d]),
                None => SmallVec::from_slice(&DIRECTIONS),
            };
            for dir in candidates {
                let next = node.step(dir);
                if !self.is_occupied(next) || visited[index(next)] {
                    continue;
                }
                visited[index(next)] = true;
                let mut extended = path.clone();
                extended.push(Move::Step(dir));
                queue.push_back((next, extended));
            }
        }

        info!("No path from {} to {}", start, end);
        None
    }
}
