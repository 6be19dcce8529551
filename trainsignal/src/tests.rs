use crate::*;
use crate::railway::Direction::*;
use crate::railway::objects::SignalState;

fn layout(size: i32, f: impl Fn(&mut Grid) -> Result<(), GridError>) -> Grid {
    let mut g = Grid::new(size).unwrap();
    f(&mut g).unwrap();
    g
}

#[test]
fn test_straight_line_matches_manhattan_distance() {
    let mut g = layout(8, |g| {
        g.place_start(1, 3)?;
        for x in 2..6 {
            g.place_track(x, 3)?;
        }
        g.place_end(6, 3)
    });
    assert!(g.is_valid());
    let path = g.find_path().unwrap();
    assert_eq!(path.len(), 5);
    assert!(path.moves.iter().all(|m| *m == Move::Step(Right)));
    assert_eq!(path.destination(g.start().unwrap()), g.end().unwrap());
}

#[test]
fn test_vertical_line() {
    let mut g = layout(4, |g| {
        g.place_end(2, 0)?;
        g.place_track(2, 1)?;
        g.place_track(2, 2)?;
        g.place_start(2, 3)
    });
    let path = g.find_path().unwrap();
    assert_eq!(path.tokens(), vec!["UP", "UP", "UP"]);
}

#[test]
fn test_red_signal_adds_one_wait() {
    let mut g = layout(5, |g| {
        g.place_start(0, 2)?;
        g.place_track(1, 2)?;
        g.place_signal(2, 2, "RED")?;
        g.place_track(3, 2)?;
        g.place_end(4, 2)
    });
    let path = g.find_path().unwrap();
    assert_eq!(path.moves, vec![Move::Step(Right), Move::Step(Right), Move::Wait,
                                Move::Step(Right), Move::Step(Right)]);
    assert_eq!(path.destination(Position::new(0, 2)), Position::new(4, 2));
    assert_eq!(path.toggled.as_slice(), &[Position::new(2, 2)]);

    // The traversal leaves the signal green on the map.
    let signal = g.object_at(2, 2).unwrap().unwrap();
    assert_eq!(signal.signal_state(), Some(SignalState::Green));
    assert_eq!(signal.glyph(), 'G');

    // A second search finds it green and needs no wait.
    let again = g.find_path().unwrap();
    assert_eq!(again.len(), 4);
    assert!(again.toggled.is_empty());
}

#[test]
fn test_green_signal_is_plain_track() {
    let mut g = layout(3, |g| {
        g.place_start(0, 0)?;
        g.place_signal(1, 0, "green")?;
        g.place_end(2, 0)
    });
    assert_eq!(g.find_path().unwrap().tokens(), vec!["RIGHT", "RIGHT"]);
}

#[test]
fn test_junction_forces_its_leg() {
    // S = J = E along row 1, with a stub above the junction.
    let mut g = layout(5, |g| {
        g.place_start(0, 1)?;
        g.place_track(1, 1)?;
        g.place_junction(2, 1, "UP")?;
        g.place_track(2, 0)?;
        g.place_track(2, 2)?;
        g.place_track(3, 1)?;
        g.place_end(4, 1)
    });
    assert!(g.is_valid());
    assert_eq!(g.find_path(), None);

    g.set_junction_direction(2, 1, "RIGHT").unwrap();
    let path = g.find_path().unwrap();
    assert_eq!(path.tokens(), vec!["RIGHT", "RIGHT", "RIGHT", "RIGHT"]);
}

#[test]
fn test_junction_skips_visited_leg() {
    // The forced leg leads back to a cell already queued, so the search
    // has to reach the end some other way.
    let mut g = layout(3, |g| {
        g.place_start(0, 0)?;
        g.place_junction(1, 0, "DOWN")?;
        g.place_track(0, 1)?;
        g.place_track(1, 1)?;
        g.place_track(2, 1)?;
        g.place_end(2, 0)
    });
    let path = g.find_path().unwrap();
    assert_eq!(path.tokens(), vec!["DOWN", "RIGHT", "RIGHT", "UP"]);
}

#[test]
fn test_wait_then_junction_then_drive() {
    let mut g = layout(4, |g| {
        g.place_start(0, 0)?;
        g.place_signal(1, 0, "RED")?;
        g.place_junction(2, 0, "DOWN")?;
        g.place_track(3, 0)?;
        g.place_track(2, 1)?;
        g.place_end(2, 2)
    });
    let path = g.find_path().unwrap();
    assert_eq!(path.to_string(), "RIGHT WAIT RIGHT DOWN DOWN");

    let frames: Vec<_> = g.drive(&path.moves).unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(frames.len(), path.len() + 1);
    let positions: Vec<Position> = frames.iter().map(|f| f.train.position()).collect();
    assert_eq!(positions, vec![
        Position::new(0, 0),
        Position::new(1, 0),
        Position::new(1, 0),
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(2, 2),
    ]);
    assert_eq!(frames.last().map(|f| f.train.direction()), Some(Down));
}

#[test]
fn test_preset_validates_but_dead_ends() {
    let mut g = Grid::new(10).unwrap();
    g.load_preset().unwrap();
    assert_eq!(g.validate(), Ok(()));

    assert_eq!(g.find_path(), None);
    let reached = g.object_at(1, 5).unwrap().and_then(|o| o.signal_state());
    assert_eq!(reached, Some(SignalState::Green));
    let unreached = g.object_at(8, 3).unwrap().and_then(|o| o.signal_state());
    assert_eq!(unreached, Some(SignalState::Red));
}

#[test]
fn test_failed_operations_do_not_mutate() {
    let mut g = layout(3, |g| {
        g.place_start(0, 0)?;
        g.place_end(2, 2)
    });
    let before = g.render();
    assert!(g.place_track(3, 0).is_err());
    assert!(g.place_signal(1, 1, "YELLOW").is_err());
    assert!(g.place_junction(1, 1, "NORTH").is_err());
    assert!(g.remove(0, -1).is_err());
    assert_eq!(g.render(), before);
}

#[test]
fn test_error_messages() {
    let mut g = Grid::new(2).unwrap();
    let e = g.place_track(5, 1).unwrap_err();
    assert_eq!(e.to_string(), "coordinate (5, 1) is outside the map (size 2)");
    let e = g.place_signal(0, 0, "blue").unwrap_err();
    assert_eq!(e.to_string(), "invalid signal state value: \"blue\"");
    let fault = g.validate().unwrap_err();
    assert_eq!(fault.to_string(), "count mismatch: map requires exactly 1 start point, found 0");
}

#[test]
fn test_every_red_signal_on_route_toggles() {
    use maplit::hashset;
    use std::collections::HashSet;

    let mut g = layout(5, |g| {
        g.place_start(0, 0)?;
        g.place_signal(1, 0, "RED")?;
        g.place_track(2, 0)?;
        g.place_signal(3, 0, "red")?;
        g.place_end(4, 0)
    });
    let path = g.find_path().unwrap();
    assert_eq!(path.to_string(), "RIGHT WAIT RIGHT RIGHT WAIT RIGHT");
    let toggled: HashSet<Position> = path.toggled.iter().cloned().collect();
    assert_eq!(toggled, hashset!{ Position::new(1, 0), Position::new(3, 0) });
    assert_eq!(g.objects().filter(|o| o.glyph() == 'R').count(), 0);
}

#[test]
fn test_demo_script() {
    use crate::input::command::Command;

    let file = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scripts/demo.txt");
    let commands = get_commands(&file).unwrap();
    assert_eq!(commands.last(), Some(&Command::Quit));

    let mut g = Grid::new(6).unwrap();
    for cmd in &commands {
        match *cmd {
            Command::Start(x, y) => g.place_start(x, y).unwrap(),
            Command::End(x, y) => g.place_end(x, y).unwrap(),
            Command::Track(x, y) => g.place_track(x, y).unwrap(),
            Command::Signal(x, y, ref s) => g.place_signal(x, y, s).unwrap(),
            Command::Junction(x, y, ref d) => g.place_junction(x, y, d).unwrap(),
            _ => {}
        }
    }
    assert!(g.is_valid());
    let path = g.find_path().unwrap();
    assert_eq!(path.to_string(), "RIGHT RIGHT WAIT RIGHT DOWN DOWN RIGHT RIGHT");
    assert_eq!(path.destination(Position::new(0, 0)), Position::new(5, 2));
}
