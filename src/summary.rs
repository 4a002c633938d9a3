use std::fmt::{self, Debug, Display, Formatter};
use std::path::Path;

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::corpus::{Corpus, DEMO};

/// What a conversion produced, for humans.
pub struct Summary<'a> {
    corpus: &'a Corpus,
    output: &'a Path,
}

impl<'a> Summary<'a> {
    pub fn new(corpus: &'a Corpus, output: &'a Path) -> Self {
        Self { corpus, output }
    }

    fn count(n: usize) -> Cell {
        Cell::new(&(n as u64).separated_string())
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Set"),
            Cell::new("Title"),
            Cell::new("Levels"),
        ]));

        let demo = if self.corpus.demo().is_empty() { 0 } else { 1 };
        table.add_row(Row::new(vec![
            Cell::new(DEMO),
            Cell::new(""),
            Self::count(demo),
        ]));
        for set in self.corpus.sets() {
            table.add_row(Row::new(vec![
                Cell::new(&set.name),
                Cell::new(&set.title),
                Self::count(set.len()),
            ]));
        }
        table.add_row(Row::new(vec![
            Cell::new("Total"),
            Cell::new(""),
            Self::count(self.corpus.total_levels()),
        ]));
        table
    }
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated {} with:", self.output.display())?;
        write!(f, "{}", self.table())
    }
}

impl Debug for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
