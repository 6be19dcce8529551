//! Grid-based rail layout.
//!
//! The track object model (`objects`, `train`) knows nothing about the grid;
//! the grid engine (`grid`, `validate`, `route`, `driver`) owns every placed
//! object and walks trains across it.

pub mod objects;
pub mod train;
pub mod grid;
pub mod validate;
pub mod route;
pub mod driver;

use std::fmt;
use std::str::FromStr;

pub type Coord = i32;

/// Largest accepted map size (the map is always square).
pub const MAX_SIZE: Coord = 20;

/// Exploration order used by neighbor listing and by path search.
pub const DIRECTIONS: [Direction; 4] =
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum GridError {
    #[fail(display = "coordinate ({}, {}) is outside the map (size {})", x, y, size)]
    OutOfBounds { x: Coord, y: Coord, size: Coord },
    #[fail(display = "invalid {} value: {:?}", field, value)]
    InvalidEnumValue { field: &'static str, value: String },
    #[fail(display = "map size {} out of range, must be between 1 and 20", _0)]
    InvalidSize(Coord),
    #[fail(display = "illegal state: {}", _0)]
    IllegalState(String),
}

/// Cell coordinate. Origin is the top left corner, +x right, +y down.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub fn new(x: Coord, y: Coord) -> Position {
        Position { x: x, y: y }
    }

    /// The adjacent position one cell away in `dir`. No bounds check.
    pub fn step(self, dir: Direction) -> Position {
        let (dx, dy) = dir.vector();
        Position { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn vector(self) -> (Coord, Coord) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl FromStr for Direction {
    type Err = GridError;
    fn from_str(s: &str) -> Result<Direction, GridError> {
        DIRECTIONS.iter()
            .cloned()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GridError::InvalidEnumValue { field: "direction", value: s.to_string() })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[test]
fn test_direction_parse() {
    assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
    assert_eq!("Right".parse::<Direction>(), Ok(Direction::Right));
    assert_eq!("north".parse::<Direction>(),
               Err(GridError::InvalidEnumValue { field: "direction", value: "north".to_string() }));
}

#[test]
fn test_position_step() {
    let p = Position::new(3, 3);
    assert_eq!(p.step(Direction::Up), Position::new(3, 2));
    assert_eq!(p.step(Direction::Down), Position::new(3, 4));
    assert_eq!(p.step(Direction::Left), Position::new(2, 3));
    assert_eq!(p.step(Direction::Right), Position::new(4, 3));
}
