use super::grid::Grid;
use super::objects::{ObjectKind, TrackObject};
use super::Position;
use log::{info, warn};

/// Minimum number of occupied neighbors around a junction: one way in and
/// two ways out.
pub const JUNCTION_MIN_CONNECTIONS: usize = 3;

/// First rule broken by a layout, as reported by `Grid::validate`.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum LayoutFault {
    #[fail(display = "invalid direction for junction at {}: direction points to empty/out-of-bounds cell", _0)]
    JunctionDirection(Position),
    #[fail(display = "invalid placement of junction at {}: insufficient connections ({} found, at least 3 required)", _0, _1)]
    InsufficientConnections(Position, usize),
    #[fail(display = "invalid placement of track object at {}: isolated track object", _0)]
    Isolated(Position),
    #[fail(display = "count mismatch: map requires exactly 1 start point, found {}", _0)]
    StartCount(usize),
    #[fail(display = "count mismatch: map requires exactly 1 end point, found {}", _0)]
    EndCount(usize),
}

impl LayoutFault {
    /// The offending cell, for faults tied to one.
    pub fn position(&self) -> Option<Position> {
        match *self {
            LayoutFault::JunctionDirection(p) |
            LayoutFault::InsufficientConnections(p, _) |
            LayoutFault::Isolated(p) => Some(p),
            LayoutFault::StartCount(_) | LayoutFault::EndCount(_) => None,
        }
    }
}

impl Grid {
    /// Checks the structural rules of the whole layout.
    ///
    /// Cells are scanned row-major (y outer, x inner) and the scan stops at
    /// the first broken rule. Start and end counts are checked after the
    /// scan, start first.
    pub fn validate(&self) -> Result<(), LayoutFault> {
        let result = self.check_layout();
        match result {
            Ok(()) => info!("Map validated"),
            Err(ref fault) => warn!("Map validation failed: {}", fault),
        }
        result
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn check_layout(&self) -> Result<(), LayoutFault> {
        let mut starts = 0;
        let mut ends = 0;
        for obj in self.objects() {
            let pos = obj.position();
            let connections = self.neighbors(pos).iter().filter(|n| n.is_occupied()).count();
            match *obj {
                TrackObject::Junction { direction, .. } => {
                    if !self.is_occupied(pos.step(direction)) {
                        return Err(LayoutFault::JunctionDirection(pos));
                    }
                    if connections < JUNCTION_MIN_CONNECTIONS {
                        return Err(LayoutFault::InsufficientConnections(pos, connections));
                    }
                }
                _ => {
                    match obj.kind() {
                        ObjectKind::Start => starts += 1,
                        ObjectKind::End => ends += 1,
                        _ => {}
                    }
                    if connections < 1 {
                        return Err(LayoutFault::Isolated(pos));
                    }
                }
            }
        }
        if starts != 1 {
            return Err(LayoutFault::StartCount(starts));
        }
        if ends != 1 {
            return Err(LayoutFault::EndCount(ends));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Grid {
        let mut g = Grid::new(3).unwrap();
        g.place_start(0, 0).unwrap();
        g.place_track(1, 0).unwrap();
        g.place_end(2, 0).unwrap();
        g
    }

    #[test]
    fn test_fresh_grid_fails() {
        for size in 1..21 {
            let g = Grid::new(size).unwrap();
            assert_eq!(g.validate(), Err(LayoutFault::StartCount(0)));
            assert!(!g.is_valid());
        }
    }

    #[test]
    fn test_simple_line_is_valid() {
        assert_eq!(line().validate(), Ok(()));
    }

    #[test]
    fn test_two_starts_fail() {
        let mut g = line();
        g.place_start(1, 1).unwrap();
        g.place_start(2, 2).unwrap();
        g.place_track(2, 1).unwrap();
        assert_eq!(g.validate(), Err(LayoutFault::StartCount(3)));
    }

    #[test]
    fn test_missing_end() {
        let mut g = line();
        g.place_track(2, 0).unwrap();
        assert_eq!(g.validate(), Err(LayoutFault::EndCount(0)));
    }

    #[test]
    fn test_isolated_object() {
        let mut g = line();
        g.place_track(1, 2).unwrap();
        let fault = g.validate().unwrap_err();
        assert_eq!(fault, LayoutFault::Isolated(Position::new(1, 2)));
        assert_eq!(fault.position(), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_junction_direction_checked_before_connections() {
        let mut g = Grid::new(5).unwrap();
        g.place_start(0, 2).unwrap();
        g.place_junction(1, 2, "RIGHT").unwrap();
        g.place_track(1, 1).unwrap();
        g.place_track(1, 3).unwrap();
        g.place_end(0, 3).unwrap();
        // Three neighbors, but the forced leg is empty.
        assert_eq!(g.validate(), Err(LayoutFault::JunctionDirection(Position::new(1, 2))));

        // Pointing off the map is just as bad.
        let mut edge = Grid::new(2).unwrap();
        edge.place_junction(1, 0, "UP").unwrap();
        assert_eq!(edge.validate(), Err(LayoutFault::JunctionDirection(Position::new(1, 0))));
    }

    #[test]
    fn test_junction_needs_three_connections() {
        let mut g = Grid::new(4).unwrap();
        g.place_start(0, 1).unwrap();
        g.place_junction(1, 1, "RIGHT").unwrap();
        g.place_end(2, 1).unwrap();
        assert_eq!(g.validate(), Err(LayoutFault::InsufficientConnections(Position::new(1, 1), 2)));

        g.place_track(1, 2).unwrap();
        assert_eq!(g.validate(), Ok(()));
    }
}
