use super::objects::{ObjectKind, TrackObject};
use super::{Coord, Direction, GridError, Position, DIRECTIONS, MAX_SIZE};
use log::{debug, info};
use smallvec::SmallVec;

/// One in-bounds cell adjacent to a queried position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub direction: Direction,
    pub position: Position,
    pub kind: Option<ObjectKind>,
}

impl Neighbor {
    pub fn is_occupied(&self) -> bool {
        self.kind.is_some()
    }
}

pub type Neighbors = SmallVec<[Neighbor; 4]>;

/// Square map of cells, each holding at most one track object.
///
/// Cells are stored row-major (`y * size + x`). The size is fixed at
/// creation. Every public operation taking coordinates checks them first and
/// leaves the grid untouched when they are off the map.
#[derive(Debug, Clone)]
pub struct Grid {
    size: Coord,
    cells: Vec<Option<TrackObject>>,
    start: Option<Position>,
    end: Option<Position>,
}

impl Grid {
    pub fn new(size: Coord) -> Result<Grid, GridError> {
        if size < 1 || size > MAX_SIZE {
            return Err(GridError::InvalidSize(size));
        }
        info!("System builder created, map size {} x {}", size, size);
        Ok(Grid {
            size: size,
            cells: vec![None; (size * size) as usize],
            start: None,
            end: None,
        })
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    /// Position of the most recently placed start point.
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    /// Position of the most recently placed end point.
    pub fn end(&self) -> Option<Position> {
        self.end
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }

    pub(crate) fn check(&self, x: Coord, y: Coord) -> Result<Position, GridError> {
        let pos = Position::new(x, y);
        if self.contains(pos) {
            Ok(pos)
        } else {
            Err(GridError::OutOfBounds { x: x, y: y, size: self.size })
        }
    }

    fn index(&self, pos: Position) -> usize {
        (pos.y * self.size + pos.x) as usize
    }

    /// Occupant of `pos`, or `None` for empty and off-map cells alike.
    pub(crate) fn cell(&self, pos: Position) -> Option<&TrackObject> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[self.index(pos)].as_ref()
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Option<&mut TrackObject> {
        if !self.contains(pos) {
            return None;
        }
        let idx = self.index(pos);
        self.cells[idx].as_mut()
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cell(pos).is_some()
    }

    pub fn object_at(&self, x: Coord, y: Coord) -> Result<Option<&TrackObject>, GridError> {
        let pos = self.check(x, y)?;
        Ok(self.cell(pos))
    }

    /// Occupied cells in row-major order.
    pub fn objects<'a>(&'a self) -> impl Iterator<Item = &'a TrackObject> + 'a {
        self.cells.iter().filter_map(|c| c.as_ref())
    }

    fn first_of_kind(&self, kind: ObjectKind) -> Option<Position> {
        self.objects().find(|o| o.kind() == kind).map(|o| o.position())
    }

    /// Stores `object` in its cell, replacing any previous occupant. The
    /// position must already be checked.
    fn place(&mut self, object: TrackObject) {
        let pos = object.position();
        let kind = object.kind();
        let idx = self.index(pos);
        let previous = self.cells[idx].replace(object);
        debug!("{} object added to map {}", kind, pos);

        match kind {
            ObjectKind::Start => self.start = Some(pos),
            ObjectKind::End => self.end = Some(pos),
            _ => {}
        }
        if let Some(previous) = previous {
            if previous.kind() != kind {
                self.forget(previous.kind(), pos);
            }
        }
    }

    /// Keeps the cached start/end in step with a start or end point that
    /// just left `pos`.
    fn forget(&mut self, kind: ObjectKind, pos: Position) {
        match kind {
            ObjectKind::Start if self.start == Some(pos) => {
                self.start = self.first_of_kind(ObjectKind::Start);
            }
            ObjectKind::End if self.end == Some(pos) => {
                self.end = self.first_of_kind(ObjectKind::End);
            }
            _ => {}
        }
    }

    pub fn place_start(&mut self, x: Coord, y: Coord) -> Result<(), GridError> {
        let pos = self.check(x, y)?;
        self.place(TrackObject::start(pos));
        Ok(())
    }

    pub fn place_end(&mut self, x: Coord, y: Coord) -> Result<(), GridError> {
        let pos = self.check(x, y)?;
        self.place(TrackObject::end(pos));
        Ok(())
    }

    pub fn place_track(&mut self, x: Coord, y: Coord) -> Result<(), GridError> {
        let pos = self.check(x, y)?;
        self.place(TrackObject::track(pos));
        Ok(())
    }

    pub fn place_signal(&mut self, x: Coord, y: Coord, state: &str) -> Result<(), GridError> {
        let pos = self.check(x, y)?;
        let signal = TrackObject::signal(pos, state)?;
        self.place(signal);
        Ok(())
    }

    pub fn place_junction(&mut self, x: Coord, y: Coord, direction: &str) -> Result<(), GridError> {
        let pos = self.check(x, y)?;
        let junction = TrackObject::junction(pos, direction)?;
        self.place(junction);
        Ok(())
    }

    /// Empties a cell and hands back what was in it.
    pub fn remove(&mut self, x: Coord, y: Coord) -> Result<Option<TrackObject>, GridError> {
        let pos = self.check(x, y)?;
        let idx = self.index(pos);
        let removed = self.cells[idx].take();
        if let Some(ref obj) = removed {
            debug!("{} object removed from map {}", obj.kind(), pos);
            self.forget(obj.kind(), pos);
        }
        Ok(removed)
    }

    /// Empties every cell and unsets start and end. The size is kept.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
        self.start = None;
        self.end = None;
        info!("System builder reset, map size {} x {}", self.size, self.size);
    }

    pub fn set_signal_state(&mut self, x: Coord, y: Coord, state: &str) -> Result<(), GridError> {
        let pos = self.check(x, y)?;
        match self.cell_mut(pos) {
            Some(obj) => obj.set_state(state),
            None => Err(GridError::IllegalState(format!("no signal at {}", pos))),
        }
    }

    pub fn set_junction_direction(&mut self, x: Coord, y: Coord, direction: &str) -> Result<(), GridError> {
        let pos = self.check(x, y)?;
        match self.cell_mut(pos) {
            Some(obj) => obj.set_direction(direction),
            None => Err(GridError::IllegalState(format!("no junction at {}", pos))),
        }
    }

    /// In-bounds cells around `(x, y)` in UP, DOWN, LEFT, RIGHT order.
    pub fn neighbors_of(&self, x: Coord, y: Coord) -> Result<Neighbors, GridError> {
        let pos = self.check(x, y)?;
        Ok(self.neighbors(pos))
    }

    pub(crate) fn neighbors(&self, pos: Position) -> Neighbors {
        DIRECTIONS.iter()
            .map(|&d| (d, pos.step(d)))
            .filter(|&(_, p)| self.contains(p))
            .map(|(d, p)| Neighbor {
                direction: d,
                position: p,
                kind: self.cell(p).map(|o| o.kind()),
            })
            .collect()
    }
}
