use super::{Direction, GridError, Position};

pub const TRAIN_GLYPH: char = '@';

/// The mobile train. It is never stored in the grid, only overlaid on it
/// while a path is driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    position: Position,
    direction: Direction,
    moving: bool,
}

impl Train {
    pub fn new(position: Position, direction: Direction) -> Train {
        Train {
            position: position,
            direction: direction,
            moving: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn glyph(&self) -> char {
        TRAIN_GLYPH
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    /// Moves one cell along the current direction.
    ///
    /// There is no bounds check here; whoever drives the train must make sure
    /// the next cell is on the map.
    pub fn advance(&mut self) -> Result<Position, GridError> {
        if !self.moving {
            return Err(GridError::IllegalState(
                format!("train at {} is not moving", self.position)));
        }
        self.position = self.position.step(self.direction);
        Ok(self.position)
    }
}

#[test]
fn test_advance_requires_moving() {
    let mut t = Train::new(Position::new(2, 2), Direction::Left);
    match t.advance() {
        Err(GridError::IllegalState(_)) => {}
        x => panic!("unexpected {:?}", x),
    }
    assert_eq!(t.position(), Position::new(2, 2));

    t.set_moving(true);
    assert_eq!(t.advance(), Ok(Position::new(1, 2)));
    t.set_direction(Direction::Down);
    assert_eq!(t.advance(), Ok(Position::new(1, 3)));
    assert!(t.is_moving());
}
