use super::{Direction, GridError, Position};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Start,
    End,
    Track,
    Signal,
    Junction,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            ObjectKind::Start => "BeginningPoint",
            ObjectKind::End => "EndPoint",
            ObjectKind::Track => "TrackSegment",
            ObjectKind::Signal => "Signal",
            ObjectKind::Junction => "Junction",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SignalState {
    Green,
    Red,
}

impl SignalState {
    pub fn name(self) -> &'static str {
        match self {
            SignalState::Green => "GREEN",
            SignalState::Red => "RED",
        }
    }
}

impl FromStr for SignalState {
    type Err = GridError;
    fn from_str(s: &str) -> Result<SignalState, GridError> {
        [SignalState::Green, SignalState::Red].iter()
            .cloned()
            .find(|st| st.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GridError::InvalidEnumValue { field: "signal state", value: s.to_string() })
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An object placed in one grid cell.
///
/// Signals and junctions carry mutable state; the glyph is always derived
/// from the current state so a setter never leaves it stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackObject {
    Start { position: Position },
    End { position: Position },
    Track { position: Position },
    Signal { position: Position, state: SignalState },
    Junction { position: Position, direction: Direction },
}

impl TrackObject {
    pub fn start(position: Position) -> TrackObject {
        TrackObject::Start { position }
    }

    pub fn end(position: Position) -> TrackObject {
        TrackObject::End { position }
    }

    pub fn track(position: Position) -> TrackObject {
        TrackObject::Track { position }
    }

    /// Fails with `InvalidEnumValue` unless `state` is GREEN or RED (any case).
    pub fn signal(position: Position, state: &str) -> Result<TrackObject, GridError> {
        Ok(TrackObject::Signal { position, state: state.parse()? })
    }

    /// Fails with `InvalidEnumValue` unless `direction` is UP, DOWN, LEFT or RIGHT (any case).
    pub fn junction(position: Position, direction: &str) -> Result<TrackObject, GridError> {
        Ok(TrackObject::Junction { position, direction: direction.parse()? })
    }

    pub fn position(&self) -> Position {
        match *self {
            TrackObject::Start { position } |
            TrackObject::End { position } |
            TrackObject::Track { position } |
            TrackObject::Signal { position, .. } |
            TrackObject::Junction { position, .. } => position,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match *self {
            TrackObject::Start { .. } => ObjectKind::Start,
            TrackObject::End { .. } => ObjectKind::End,
            TrackObject::Track { .. } => ObjectKind::Track,
            TrackObject::Signal { .. } => ObjectKind::Signal,
            TrackObject::Junction { .. } => ObjectKind::Junction,
        }
    }

    pub fn glyph(&self) -> char {
        match *self {
            TrackObject::Start { .. } => 'B',
            TrackObject::End { .. } => 'E',
            TrackObject::Track { .. } => '=',
            TrackObject::Signal { state: SignalState::Green, .. } => 'G',
            TrackObject::Signal { state: SignalState::Red, .. } => 'R',
            TrackObject::Junction { direction: Direction::Up, .. } => '^',
            TrackObject::Junction { direction: Direction::Down, .. } => 'v',
            TrackObject::Junction { direction: Direction::Left, .. } => '<',
            TrackObject::Junction { direction: Direction::Right, .. } => '>',
        }
    }

    pub fn signal_state(&self) -> Option<SignalState> {
        match *self {
            TrackObject::Signal { state, .. } => Some(state),
            _ => None,
        }
    }

    pub fn junction_direction(&self) -> Option<Direction> {
        match *self {
            TrackObject::Junction { direction, .. } => Some(direction),
            _ => None,
        }
    }

    /// Re-validates `new_state` and stores it. On error the signal is unchanged.
    pub fn set_state(&mut self, new_state: &str) -> Result<(), GridError> {
        let parsed = new_state.parse::<SignalState>()?;
        self.set_signal_state(parsed)
    }

    pub(crate) fn set_signal_state(&mut self, new_state: SignalState) -> Result<(), GridError> {
        match *self {
            TrackObject::Signal { ref mut state, .. } => {
                *state = new_state;
                Ok(())
            }
            ref other => Err(GridError::IllegalState(
                format!("{} at {} has no signal state", other.kind(), other.position()))),
        }
    }

    /// Re-validates `new_direction` and stores it. On error the junction is unchanged.
    pub fn set_direction(&mut self, new_direction: &str) -> Result<(), GridError> {
        let parsed = new_direction.parse::<Direction>()?;
        match *self {
            TrackObject::Junction { ref mut direction, .. } => {
                *direction = parsed;
                Ok(())
            }
            ref other => Err(GridError::IllegalState(
                format!("{} at {} has no direction", other.kind(), other.position()))),
        }
    }
}

#[test]
fn test_signal_construction() {
    let p = Position::new(1, 2);
    let s = TrackObject::signal(p, "red").unwrap();
    assert_eq!(s.kind(), ObjectKind::Signal);
    assert_eq!(s.signal_state(), Some(SignalState::Red));
    assert_eq!(s.glyph(), 'R');
    assert_eq!(s.position(), p);

    match TrackObject::signal(p, "YELLOW") {
        Err(GridError::InvalidEnumValue { field, value }) => {
            assert_eq!(field, "signal state");
            assert_eq!(value, "YELLOW");
        }
        x => panic!("unexpected {:?}", x),
    }
}

#[test]
fn test_setters_update_glyph() {
    let mut s = TrackObject::signal(Position::new(0, 0), "GREEN").unwrap();
    assert_eq!(s.glyph(), 'G');
    s.set_state("Red").unwrap();
    assert_eq!(s.glyph(), 'R');
    assert!(s.set_state("blue").is_err());
    assert_eq!(s.signal_state(), Some(SignalState::Red));

    let mut j = TrackObject::junction(Position::new(0, 0), "left").unwrap();
    assert_eq!(j.glyph(), '<');
    j.set_direction("DOWN").unwrap();
    assert_eq!(j.junction_direction(), Some(Direction::Down));
    assert_eq!(j.glyph(), 'v');
    assert!(j.set_direction("sideways").is_err());
    assert_eq!(j.glyph(), 'v');
}

#[test]
fn test_setter_on_wrong_kind() {
    let mut t = TrackObject::track(Position::new(4, 4));
    match t.set_state("GREEN") {
        Err(GridError::IllegalState(_)) => {}
        x => panic!("unexpected {:?}", x),
    }
    assert!(t.set_direction("UP").is_err());
    assert_eq!(t.glyph(), '=');
}
