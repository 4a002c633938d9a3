use std::fmt::{self, Display, Formatter};

/// Every glyph that marks a line as level content. Space counts too.
pub(crate) const LEVEL_GLYPHS: &str = "@$.*+# ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Pos {
        Pos { x, y }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// The static part of a cell, what remains once the player and boxes are lifted out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Empty,
    Wall,
    Goal,
}

impl MapCell {
    pub fn to_char(self) -> char {
        match self {
            MapCell::Empty => ' ',
            MapCell::Wall => '#',
            MapCell::Goal => '.',
        }
    }
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

/// What a single glyph contributes to a parsed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphEffect {
    pub cell: MapCell,
    pub has_box: bool,
    pub has_goal: bool,
    pub has_player: bool,
}

impl GlyphEffect {
    const fn new(cell: MapCell, has_box: bool, has_goal: bool, has_player: bool) -> Self {
        GlyphEffect {
            cell,
            has_box,
            has_goal,
            has_player,
        }
    }
}

const FLOOR: GlyphEffect = GlyphEffect::new(MapCell::Empty, false, false, false);

const GLYPHS: [(char, GlyphEffect); 6] = [
    ('@', GlyphEffect::new(MapCell::Empty, false, false, true)),
    ('+', GlyphEffect::new(MapCell::Goal, false, true, true)),
    ('$', GlyphEffect::new(MapCell::Empty, true, false, false)),
    ('*', GlyphEffect::new(MapCell::Goal, true, true, false)),
    ('.', GlyphEffect::new(MapCell::Goal, false, true, false)),
    ('#', GlyphEffect::new(MapCell::Wall, false, false, false)),
];

/// Looks up a glyph, anything unknown is floor.
pub fn glyph_effect(glyph: char) -> GlyphEffect {
    GLYPHS
        .iter()
        .find(|&&(g, _)| g == glyph)
        .map(|&(_, effect)| effect)
        .unwrap_or(FLOOR)
}
