use std::fmt::{self, Debug, Display, Formatter};

use serde::Serialize;

use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::parser;
use crate::vec2d::Vec2d;

/// One level exactly as it appears in the corpus, row by row.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawLevel {
    rows: Vec<String>,
}

impl RawLevel {
    pub fn new<S: Into<String>>(rows: Vec<S>) -> Self {
        RawLevel {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row in chars.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn parse(&self) -> ParsedLevel {
        parser::parse(self)
    }
}

impl Display for RawLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl Debug for RawLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSet {
    pub name: String,
    /// Whatever followed the delimiter on the header line, e.g. `I`.
    pub title: String,
    pub levels: Vec<RawLevel>,
}

impl LevelSet {
    pub fn new(name: String, title: String, levels: Vec<RawLevel>) -> Self {
        LevelSet {
            name,
            title,
            levels,
        }
    }

    /// 1-indexed.
    pub fn level(&self, number: usize) -> Option<&RawLevel> {
        number.checked_sub(1).and_then(|i| self.levels.get(i))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Structural problems that don't stop a conversion but are worth a look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelIssue {
    NoPlayer,
    MultiplePlayers(usize),
    BoxesGoals { boxes: usize, goals: usize },
}

impl Display for LevelIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LevelIssue::NoPlayer => write!(f, "No player"),
            LevelIssue::MultiplePlayers(n) => write!(f, "{} players, the last one is used", n),
            LevelIssue::BoxesGoals { boxes, goals } => {
                write!(f, "Different number of boxes ({}) and goals ({})", boxes, goals)
            }
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ParsedLevel {
    /// `@` and `+` already replaced by floor and goal, `$` and `*` likewise.
    pub grid: Vec2d<MapCell>,
    pub player_pos: Pos,
    pub boxes: Vec<Pos>,
    pub goals: Vec<Pos>,
    pub walls: Vec<Pos>,
    /// How many player glyphs were seen, only used for the audit.
    pub(crate) players: usize,
}

impl ParsedLevel {
    pub fn width(&self) -> usize {
        self.grid.cols()
    }

    pub fn height(&self) -> usize {
        self.grid.rows()
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        MapFormatter::new(self)
    }

    pub fn issues(&self) -> Vec<LevelIssue> {
        let mut issues = Vec::new();
        match self.players {
            0 => issues.push(LevelIssue::NoPlayer),
            1 => {}
            n => issues.push(LevelIssue::MultiplePlayers(n)),
        }
        if self.boxes.len() != self.goals.len() {
            issues.push(LevelIssue::BoxesGoals {
                boxes: self.boxes.len(),
                goals: self.goals.len(),
            });
        }
        issues
    }
}

impl Display for ParsedLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for ParsedLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}
