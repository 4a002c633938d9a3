use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::corpus::{Corpus, DEMO};
use crate::level::RawLevel;

const JS_HEADER: &str = "\
// Sokoban Levels - JavaScript version
// Generated by sokoban-levels, do not edit

const SOKOBAN_LEVELS = {
    // Level symbols:
    // @ - Player starting position
    // $ - Box/crate starting position
    // . - Goal where a box needs to be pushed
    // + - Player & goal (player on goal)
    // * - Box & goal (box on goal)
    // # - Wall
    // (space) - Empty open space
";

const JS_ACCESSORS: &str = r#"
// Helper functions for level access
const LevelManager = {
    // 1-indexed, null if the set or level doesn't exist
    getLevel: function(setName, levelNumber) {
        if (setName === 'demo' || !Object.prototype.hasOwnProperty.call(SOKOBAN_LEVELS, setName)) {
            return null;
        }
        const level = SOKOBAN_LEVELS[setName][levelNumber - 1];
        return level || null;
    },

    getDemoLevel: function() {
        return SOKOBAN_LEVELS.demo;
    },

    getLevelCount: function(setName) {
        if (setName === 'demo' || !Object.prototype.hasOwnProperty.call(SOKOBAN_LEVELS, setName)) {
            return 0;
        }
        return SOKOBAN_LEVELS[setName].length;
    },

    getAvailableSets: function() {
        return Object.keys(SOKOBAN_LEVELS).filter(key => key !== 'demo');
    },

    parseLevel: function(levelArray) {
        const glyphs = {
            '@': { cell: ' ', player: true },
            '+': { cell: '.', player: true, goal: true },
            '$': { cell: ' ', box: true },
            '*': { cell: '.', box: true, goal: true },
            '.': { cell: '.', goal: true },
            '#': { cell: '#', wall: true },
        };
        const level = {
            grid: [],
            width: levelArray.reduce((max, row) => Math.max(max, row.length), 0),
            height: levelArray.length,
            playerStart: { x: 0, y: 0 },
            boxes: [],
            goals: [],
            walls: []
        };

        for (let y = 0; y < level.height; y++) {
            const row = levelArray[y];
            level.grid[y] = [];
            for (let x = 0; x < level.width; x++) {
                const glyph = glyphs[x < row.length ? row[x] : ' '] || { cell: ' ' };
                level.grid[y][x] = glyph.cell;
                if (glyph.player) level.playerStart = { x, y };
                if (glyph.box) level.boxes.push({ x, y });
                if (glyph.goal) level.goals.push({ x, y });
                if (glyph.wall) level.walls.push({ x, y });
            }
        }

        return level;
    },

    getParsedLevel: function(setName, levelNumber) {
        const levelArray = this.getLevel(setName, levelNumber);
        return levelArray ? this.parseLevel(levelArray) : null;
    },

    getParsedDemoLevel: function() {
        return this.parseLevel(SOKOBAN_LEVELS.demo);
    }
};

if (typeof module !== 'undefined' && module.exports) {
    module.exports = { SOKOBAN_LEVELS, LevelManager };
}
"#;

/// Renders a whole corpus as a data file the game can load.
pub struct ArtifactFormatter<'a> {
    corpus: &'a Corpus,
    format: Format,
}

impl<'a> ArtifactFormatter<'a> {
    pub fn new(corpus: &'a Corpus, format: Format) -> Self {
        Self { corpus, format }
    }

    fn write_js(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", JS_HEADER)?;

        writeln!(f, "\n    // Demo level")?;
        writeln!(f, "    {}: [", DEMO)?;
        Self::write_rows(self.corpus.demo(), "        ", f)?;
        write!(f, "    ]")?;

        for set in self.corpus.sets() {
            writeln!(f, ",\n")?;
            if set.title.is_empty() {
                writeln!(f, "    // {} ({} levels)", set.name, set.len())?;
            } else {
                writeln!(f, "    // Set {} ({} levels)", set.title, set.len())?;
            }
            writeln!(f, "    {}: [", set.name)?;
            for (i, level) in set.levels.iter().enumerate() {
                if i > 0 {
                    writeln!(f, ",\n")?;
                }
                writeln!(f, "        // Level {}", i + 1)?;
                writeln!(f, "        [")?;
                Self::write_rows(level, "            ", f)?;
                write!(f, "        ]")?;
            }
            if !set.is_empty() {
                writeln!(f)?;
            }
            write!(f, "    ]")?;
        }
        writeln!(f, "\n}};")?;

        write!(f, "{}", JS_ACCESSORS)
    }

    fn write_rows(level: &RawLevel, indent: &str, f: &mut Formatter<'_>) -> fmt::Result {
        let last = level.rows().len().saturating_sub(1);
        for (i, row) in level.rows().iter().enumerate() {
            // JSON string literals are valid JS string literals
            let literal = serde_json::to_string(row).map_err(|_| fmt::Error)?;
            let separator = if i == last { "" } else { "," };
            writeln!(f, "{}{}{}", indent, literal, separator)?;
        }
        Ok(())
    }

    fn write_json(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self.corpus).map_err(|_| fmt::Error)?;
        writeln!(f, "{}", json)
    }
}

impl Display for ArtifactFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Js => self.write_js(f),
            Format::Json => self.write_json(f),
        }
    }
}

impl Debug for ArtifactFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
