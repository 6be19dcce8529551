use crate::railway::grid::Grid;
use crate::railway::train::Train;
use crate::railway::Position;
use std::fmt;

pub const EMPTY_GLYPH: char = '.';
const COLUMN_GAP: &str = "   ";

/// Text dump of the map, row by row from the top, with the train drawn over
/// whatever cell it occupies. Rows are separated by a blank line.
pub fn render(grid: &Grid, train: Option<&Train>) -> String {
    let mut s = String::new();
    for y in 0..grid.size() {
        for x in 0..grid.size() {
            if x > 0 {
                s.push_str(COLUMN_GAP);
            }
            let pos = Position::new(x, y);
            let glyph = match train {
                Some(t) if t.position() == pos => t.glyph(),
                _ => grid.cell(pos).map(|o| o.glyph()).unwrap_or(EMPTY_GLYPH),
            };
            s.push(glyph);
        }
        s.push_str("\n\n");
    }
    s
}

impl Grid {
    pub fn render(&self) -> String {
        render(self, None)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render(self, None))
    }
}
