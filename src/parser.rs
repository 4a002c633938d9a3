use log::debug;

use crate::data::{glyph_effect, MapCell, Pos};
use crate::level::{ParsedLevel, RawLevel};
use crate::vec2d::Vec2d;

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
///
/// Never fails: rows shorter than the widest are padded with floor,
/// unknown glyphs are floor and a level without a player gets one at `[0, 0]`.
/// Boxes, goals and walls are listed in row-major order.
pub fn parse(level: &RawLevel) -> ParsedLevel {
    let mut grid = Vec::with_capacity(level.height());
    let mut goals = Vec::new();
    let mut boxes = Vec::new();
    let mut walls = Vec::new();
    let mut player_pos = None;
    let mut players = 0;

    for (y, line) in level.rows().iter().enumerate() {
        let mut line_tiles = Vec::new();
        for (x, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(x, y);
            let effect = glyph_effect(cur_char);

            if effect.has_player {
                // last one wins, the audit reports the rest
                player_pos = Some(pos);
                players += 1;
            }
            if effect.has_box {
                boxes.push(pos);
            }
            if effect.has_goal {
                goals.push(pos);
            }
            if effect.cell == MapCell::Wall {
                walls.push(pos);
            }
            line_tiles.push(effect.cell);
        }
        grid.push(line_tiles);
    }

    let player_pos = player_pos.unwrap_or_else(|| {
        debug!("Level without a player, defaulting to [0, 0]");
        Pos::new(0, 0)
    });

    ParsedLevel {
        grid: Vec2d::from_rows(&grid, MapCell::Empty),
        player_pos,
        boxes,
        goals,
        walls,
        players,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(level: &str) -> RawLevel {
        // trim so we can specify levels using raw strings more easily
        RawLevel::new(level.trim_matches('\n').lines().collect())
    }

    fn count(level: &RawLevel, glyphs: &[char]) -> usize {
        level
            .rows()
            .iter()
            .flat_map(|row| row.chars())
            .filter(|c| glyphs.contains(c))
            .count()
    }

    #[test]
    fn simplest() {
        let level = raw(r"
#####
#@$.#
#####
");
        let parsed = parse(&level);
        assert_eq!(parsed.width(), 5);
        assert_eq!(parsed.height(), 3);
        assert_eq!(parsed.player_pos, Pos::new(1, 1));
        assert_eq!(parsed.boxes, vec![Pos::new(2, 1)]);
        assert_eq!(parsed.goals, vec![Pos::new(3, 1)]);
        assert_eq!(parsed.walls.len(), 12);
        assert_eq!(parsed.grid.to_string(), "#####\n#  .#\n#####\n");
    }

    #[test]
    fn box_on_goal() {
        let level = RawLevel::new(vec![" @ *"]);
        let parsed = parse(&level);
        assert_eq!(parsed.player_pos, Pos::new(1, 0));
        assert_eq!(parsed.boxes, vec![Pos::new(3, 0)]);
        assert_eq!(parsed.goals, vec![Pos::new(3, 0)]);
        assert!(parsed.walls.is_empty());
        assert_eq!(parsed.grid[Pos::new(3, 0)], MapCell::Goal);
        assert_eq!(parsed.grid[Pos::new(1, 0)], MapCell::Empty);
    }

    #[test]
    fn player_on_goal() {
        let level = raw(r"
####
#+$#
####
");
        let parsed = parse(&level);
        assert_eq!(parsed.player_pos, Pos::new(1, 1));
        assert_eq!(parsed.goals, vec![Pos::new(1, 1)]);
        assert_eq!(parsed.boxes, vec![Pos::new(2, 1)]);
        assert_eq!(parsed.grid[Pos::new(1, 1)], MapCell::Goal);
    }

    #[test]
    fn no_player() {
        let level = raw(r"
####
#$.#
####
");
        let parsed = parse(&level);
        assert_eq!(parsed.player_pos, Pos::new(0, 0));
    }

    #[test]
    fn empty() {
        let parsed = parse(&RawLevel::default());
        assert_eq!(parsed.width(), 0);
        assert_eq!(parsed.height(), 0);
        assert_eq!(parsed.player_pos, Pos::new(0, 0));
        assert!(parsed.boxes.is_empty() && parsed.goals.is_empty() && parsed.walls.is_empty());
    }

    #[test]
    fn ragged_rows() {
        let level = raw(r"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
");
        let parsed = parse(&level);
        assert_eq!(parsed.width(), 19);
        assert_eq!(parsed.height(), 11);
        assert_eq!(parsed.player_pos, Pos::new(11, 8));

        for (y, row) in level.rows().iter().enumerate() {
            for x in row.chars().count()..parsed.width() {
                assert_eq!(parsed.grid[Pos::new(x, y)], MapCell::Empty);
            }
        }
        for &pos in parsed.boxes.iter().chain(&parsed.goals).chain(&parsed.walls) {
            assert!(pos.x < parsed.width() && pos.y < parsed.height());
        }
    }

    #[test]
    fn counts_match_glyphs() {
        let level = raw(r"
  ####
###  ####
#     $ #
# #  #$ #
# . .#@ #
#########
#*+.$  #
########
");
        let parsed = parse(&level);
        assert_eq!(parsed.boxes.len(), count(&level, &['$', '*']));
        assert_eq!(parsed.goals.len(), count(&level, &['.', '+', '*']));
        assert_eq!(parsed.walls.len(), count(&level, &['#']));
    }

    #[test]
    fn row_major_order() {
        let level = raw(r"
$.$
.*.
");
        let parsed = parse(&level);
        assert_eq!(
            parsed.boxes,
            vec![Pos::new(0, 0), Pos::new(2, 0), Pos::new(1, 1)]
        );
        assert_eq!(
            parsed.goals,
            vec![Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1)]
        );
    }

    #[test]
    fn input_untouched() {
        let level = raw(r"
#####
#@*.#
#####
");
        let copy = level.clone();
        let _ = parse(&level);
        assert_eq!(level, copy);
    }
}
