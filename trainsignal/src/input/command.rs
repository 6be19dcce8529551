use crate::railway::Coord;
use regex::Regex;

pub const HELP: &str = "\
Commands (case-insensitive, coordinates as X,Y):
  B x,y        place the beginning (start) point
  E x,y        place the end point
  T x,y        place a track segment
  S x,y STATE  place a signal, STATE is GREEN or RED
  J x,y DIR    place a junction, DIR is UP, DOWN, LEFT or RIGHT
  D x,y        remove the object at x,y
  P            load the preset sample map
  V            validate the map
  C            clear the map
  M            draw the map
  R            run the train from start to end
  H            show this help
  Q            quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start(Coord, Coord),
    End(Coord, Coord),
    Track(Coord, Coord),
    Signal(Coord, Coord, String),
    Junction(Coord, Coord, String),
    Remove(Coord, Coord),
    Preset,
    Validate,
    Clear,
    Map,
    Run,
    Help,
    Quit,
}

#[derive(Debug, Fail)]
pub enum ParseError {
    #[fail(display = "error in regular expression: {}", _0)]
    RegexError(String),
    #[fail(display = "error converting number")]
    NumberError,
    #[fail(display = "unrecognized command: {}", _0)]
    Unrecognized(String),
}

/// Line parser for the console command language.
///
/// * `T 3,4`
/// * `s 2, 2 red`
/// * `q`
///
/// Signal states and junction directions are passed through as written;
/// the grid rejects unknown values when the command is applied.
pub struct CommandParser {
    place_re: Regex,
    place_with_re: Regex,
    single_re: Regex,
}

fn compile(pattern: &str) -> Result<Regex, ParseError> {
    Regex::new(pattern).map_err(|e| ParseError::RegexError(format!("{:?}", e)))
}

fn coord(s: &str) -> Result<Coord, ParseError> {
    s.parse::<Coord>().map_err(|_e| ParseError::NumberError)
}

impl CommandParser {
    pub fn new() -> Result<CommandParser, ParseError> {
        Ok(CommandParser {
            place_re: compile(r"(?i)^\s*([betd])\s+(-?\d+)\s*,\s*(-?\d+)\s*$")?,
            place_with_re: compile(r"(?xi) ^ \s* (?P<cmd>[sj]) \s+
                (?P<x>-?\d+) \s* , \s* (?P<y>-?\d+) \s+
                (?P<value>\w+) \s* $")?,
            single_re: compile(r"(?i)^\s*([pvcmrhq])\s*$")?,
        })
    }

    /// Parses one line. Blank lines and `#` comments give `None`.
    pub fn parse_line(&self, line: &str) -> Result<Option<Command>, ParseError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        if let Some(groups) = self.place_re.captures(line) {
            let x = coord(&groups[2])?;
            let y = coord(&groups[3])?;
            let cmd = match groups[1].to_ascii_uppercase().as_str() {
                "B" => Command::Start(x, y),
                "E" => Command::End(x, y),
                "T" => Command::Track(x, y),
                _ => Command::Remove(x, y),
            };
            return Ok(Some(cmd));
        }
        if let Some(groups) = self.place_with_re.captures(line) {
            let x = coord(&groups["x"])?;
            let y = coord(&groups["y"])?;
            let value = groups["value"].to_string();
            let cmd = if groups["cmd"].eq_ignore_ascii_case("s") {
                Command::Signal(x, y, value)
            } else {
                Command::Junction(x, y, value)
            };
            return Ok(Some(cmd));
        }
        if let Some(groups) = self.single_re.captures(line) {
            let cmd = match groups[1].to_ascii_uppercase().as_str() {
                "P" => Command::Preset,
                "V" => Command::Validate,
                "C" => Command::Clear,
                "M" => Command::Map,
                "R" => Command::Run,
                "H" => Command::Help,
                _ => Command::Quit,
            };
            return Ok(Some(cmd));
        }
        Err(ParseError::Unrecognized(trimmed.to_string()))
    }
}

/// Parses a whole command script, one command per line.
pub fn parse_script(input: &str) -> Result<Vec<Command>, ParseError> {
    let parser = CommandParser::new()?;
    let mut commands = Vec::new();
    for line in input.lines() {
        if let Some(cmd) = parser.parse_line(line)? {
            commands.push(cmd);
        }
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_commands() {
        let p = CommandParser::new().unwrap();
        assert_eq!(p.parse_line("B 1,1").unwrap(), Some(Command::Start(1, 1)));
        assert_eq!(p.parse_line("  e 8 , 8 ").unwrap(), Some(Command::End(8, 8)));
        assert_eq!(p.parse_line("T 0,12").unwrap(), Some(Command::Track(0, 12)));
        assert_eq!(p.parse_line("d -1,2").unwrap(), Some(Command::Remove(-1, 2)));
        assert_eq!(p.parse_line("S 3,3 red").unwrap(),
                   Some(Command::Signal(3, 3, "red".to_string())));
        assert_eq!(p.parse_line("j 5,7 UP").unwrap(),
                   Some(Command::Junction(5, 7, "UP".to_string())));
        // Unknown values are left for the grid to reject.
        assert_eq!(p.parse_line("S 1,1 YELLOW").unwrap(),
                   Some(Command::Signal(1, 1, "YELLOW".to_string())));
    }

    #[test]
    fn test_single_letter_commands() {
        let p = CommandParser::new().unwrap();
        let expected = [("p", Command::Preset), ("V", Command::Validate), ("c", Command::Clear),
                        ("M", Command::Map), ("r", Command::Run), ("H", Command::Help),
                        ("q", Command::Quit)];
        for &(ref line, ref cmd) in expected.iter() {
            assert_eq!(p.parse_line(line).unwrap().as_ref(), Some(cmd));
        }
    }

    #[test]
    fn test_rejected_lines() {
        let p = CommandParser::new().unwrap();
        assert_eq!(p.parse_line("").unwrap(), None);
        assert_eq!(p.parse_line("# a comment").unwrap(), None);
        match p.parse_line("X 1,1") {
            Err(ParseError::Unrecognized(s)) => assert_eq!(s, "X 1,1"),
            x => panic!("unexpected {:?}", x),
        }
        assert!(p.parse_line("T 1").is_err());
        assert!(p.parse_line("S 1,1").is_err());
        match p.parse_line("T 99999999999,1") {
            Err(ParseError::NumberError) => {}
            x => panic!("unexpected {:?}", x),
        }
    }

    #[test]
    fn test_script() {
        let script = "# line\nB 0,0\nT 1,0\n\nE 2,0\nR\n";
        let cmds = parse_script(script).unwrap();
        assert_eq!(cmds, vec![Command::Start(0, 0), Command::Track(1, 0),
                              Command::End(2, 0), Command::Run]);
        assert!(parse_script("B 0,0\nfly\n").is_err());
    }
}
