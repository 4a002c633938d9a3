use fnv::FnvHashMap;
use log::{debug, warn};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::data::LEVEL_GLYPHS;
use crate::level::{LevelIssue, LevelSet, ParsedLevel, RawLevel};

pub const DEMO: &str = "demo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Level,
    /// Empty or a comment, ends the level being collected.
    Terminator,
    /// Neither, skipped without ending anything.
    Other,
}

fn classify(line: &str) -> LineKind {
    if line.is_empty() || line.starts_with(';') {
        LineKind::Terminator
    } else if line.chars().any(|c| LEVEL_GLYPHS.contains(c)) {
        LineKind::Level
    } else {
        LineKind::Other
    }
}

/// The first contiguous run of level lines, later ones are ignored.
fn extract_demo(region: &str) -> RawLevel {
    let mut rows = Vec::new();
    for line in region.lines().map(str::trim_end) {
        match classify(line) {
            LineKind::Level => rows.push(line),
            LineKind::Terminator if !rows.is_empty() => break,
            LineKind::Terminator | LineKind::Other => {}
        }
    }
    RawLevel::new(rows)
}

/// Splits a region into blank/comment delimited levels. Never emits an empty level.
fn extract_levels(region: &str) -> Vec<RawLevel> {
    let mut levels = Vec::new();
    let mut current = Vec::new();
    for line in region.lines().map(str::trim_end) {
        match classify(line) {
            LineKind::Level => current.push(line),
            LineKind::Terminator => {
                if !current.is_empty() {
                    levels.push(RawLevel::new(current));
                    current = Vec::new();
                }
            }
            LineKind::Other => {}
        }
    }
    if !current.is_empty() {
        levels.push(RawLevel::new(current));
    }
    levels
}

fn roman(mut n: usize) -> String {
    const NUMERALS: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut ret = String::new();
    for &(value, numeral) in NUMERALS.iter() {
        while n >= value {
            ret.push_str(numeral);
            n -= value;
        }
    }
    ret
}

/// Name of the set at 0-based `index`: `setI`, `setII`, ...
pub fn set_name(index: usize) -> String {
    format!("set{}", roman(index + 1))
}

/// The demo level and every level set of one source text.
#[derive(Debug, Clone)]
pub struct Corpus {
    demo: RawLevel,
    sets: Vec<LevelSet>,
    by_name: FnvHashMap<String, usize>,
}

impl Corpus {
    pub fn new(demo: RawLevel, sets: Vec<LevelSet>) -> Self {
        let by_name = sets
            .iter()
            .enumerate()
            .map(|(i, set)| (set.name.clone(), i))
            .collect();
        Corpus {
            demo,
            sets,
            by_name,
        }
    }

    /// Everything before the first `delimiter` is the demo region,
    /// each following region is one set.
    ///
    /// The rest of a delimiter's line is the set's title, not level content.
    /// Nothing here fails, a text without delimiters just has no sets.
    pub fn parse(text: &str, delimiter: &str) -> Corpus {
        let mut headers: Vec<(usize, usize, String)> = Vec::new();
        if !delimiter.is_empty() {
            for (start, _) in text.match_indices(delimiter) {
                // a repeat on an already consumed header line is part of that title
                if headers.last().map_or(false, |&(_, end, _)| start < end) {
                    continue;
                }
                let rest = &text[start + delimiter.len()..];
                // a delimiter ending in a newline has already consumed its line
                let line_len = if delimiter.ends_with('\n') {
                    0
                } else {
                    rest.find('\n').unwrap_or_else(|| rest.len())
                };
                let end = start + delimiter.len() + line_len;
                headers.push((start, end, rest[..line_len].trim().to_string()));
            }
        }
        debug!("Found {} set regions", headers.len());

        let demo_end = headers.first().map_or(text.len(), |&(start, _, _)| start);
        let demo = extract_demo(&text[..demo_end]);
        if demo.is_empty() {
            warn!("No demo level found");
        }

        let mut sets = Vec::with_capacity(headers.len());
        for (i, (_, end, title)) in headers.iter().enumerate() {
            let region_end = headers.get(i + 1).map_or(text.len(), |&(start, _, _)| start);
            let levels = extract_levels(&text[*end..region_end]);
            let name = set_name(i);
            debug!("{}: {} levels", name, levels.len());
            sets.push(LevelSet::new(name, title.clone(), levels));
        }

        Corpus::new(demo, sets)
    }

    pub fn demo(&self) -> &RawLevel {
        &self.demo
    }

    pub fn sets(&self) -> &[LevelSet] {
        &self.sets
    }

    pub fn set(&self, set_name: &str) -> Option<&LevelSet> {
        self.by_name.get(set_name).map(|&i| &self.sets[i])
    }

    /// Excludes the demo.
    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|set| set.name.as_str())
    }

    /// `number` is 1-indexed, anything outside `1..=count` is `None`.
    pub fn level(&self, set_name: &str, number: usize) -> Option<&RawLevel> {
        self.set(set_name).and_then(|set| set.level(number))
    }

    /// 0 for unknown sets.
    pub fn level_count(&self, set_name: &str) -> usize {
        self.set(set_name).map_or(0, LevelSet::len)
    }

    pub fn parsed_level(&self, set_name: &str, number: usize) -> Option<ParsedLevel> {
        self.level(set_name, number).map(RawLevel::parse)
    }

    pub fn parsed_demo(&self) -> ParsedLevel {
        self.demo.parse()
    }

    /// Demo (if present) plus all set levels.
    pub fn total_levels(&self) -> usize {
        let demo = if self.demo.is_empty() { 0 } else { 1 };
        demo + self.sets.iter().map(LevelSet::len).sum::<usize>()
    }

    /// Every issue of every level as `(set name, level number, issue)`.
    /// The demo is reported as level 1 of `demo`.
    pub fn audit(&self) -> Vec<(String, usize, LevelIssue)> {
        let demo = Some((DEMO, 1, &self.demo)).filter(|_| !self.demo.is_empty());
        let levels = self.sets.iter().flat_map(|set| {
            set.levels
                .iter()
                .enumerate()
                .map(move |(i, level)| (set.name.as_str(), i + 1, level))
        });

        let mut issues = Vec::new();
        for (set_name, number, level) in demo.into_iter().chain(levels) {
            for issue in level.parse().issues() {
                warn!("{} level {}: {}", set_name, number, issue);
                issues.push((set_name.to_string(), number, issue));
            }
        }
        issues
    }
}

/// `{"demo": [rows], "setI": [[rows], ...], ...}` in document order.
impl Serialize for Corpus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sets.len() + 1))?;
        map.serialize_entry(DEMO, &self.demo)?;
        for set in &self.sets {
            map.serialize_entry(&set.name, &set.levels)?;
        }
        map.end()
    }
}
