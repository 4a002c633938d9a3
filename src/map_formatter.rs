use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Contents, MapCell};
use crate::level::ParsedLevel;

/// Writes a parsed level back out as XSB.
pub struct MapFormatter<'a> {
    level: &'a ParsedLevel,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(level: &'a ParsedLevel) -> Self {
        Self { level }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = &self.level.grid;
        let mut state_grid = grid.scratchpad(Contents::Empty);
        for &b in &self.level.boxes {
            state_grid[b] = Contents::Box;
        }
        if self.level.players > 0 {
            state_grid[self.level.player_pos] = Contents::Player;
        }

        for (cells, contents) in grid.iter_rows().zip(state_grid.iter_rows()) {
            // don't print trailing empty cells to match the input level strings
            let len = cells
                .iter()
                .zip(contents)
                .rposition(|(&cell, &content)| {
                    cell != MapCell::Empty || content != Contents::Empty
                })
                .map_or(0, |last| last + 1);

            for (&cell, &content) in cells.iter().zip(contents).take(len) {
                Self::write_cell_xsb(cell, content, f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell_xsb(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        match (cell, contents) {
            (MapCell::Empty, Contents::Empty) => write!(f, " "),
            (MapCell::Empty, Contents::Box) => write!(f, "$"),
            (MapCell::Empty, Contents::Player) => write!(f, "@"),
            (MapCell::Wall, _) => write!(f, "#"),
            (MapCell::Goal, Contents::Empty) => write!(f, "."),
            (MapCell::Goal, Contents::Box) => write!(f, "*"),
            (MapCell::Goal, Contents::Player) => write!(f, "+"),
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
