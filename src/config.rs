use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "sokobanLevels.txt";
pub const DEFAULT_DELIMITER: &str = "; Sasquatch Set";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Js,
    Json,
}

impl Format {
    pub fn default_output(self) -> &'static str {
        match self {
            Format::Js => "levels_complete.js",
            Format::Json => "levels_complete.json",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Format::Js => write!(f, "js"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// Everything one conversion needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: Format,
    pub delimiter: String,
}

impl Config {
    pub fn new(format: Format) -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(format.default_output()),
            format,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Format::Js)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.format, Format::Js);
        assert_eq!(config.input, PathBuf::from("sokobanLevels.txt"));
        assert_eq!(config.output, PathBuf::from("levels_complete.js"));
        assert_eq!(config.delimiter, "; Sasquatch Set");

        assert_eq!(Config::new(Format::Json).output, PathBuf::from("levels_complete.json"));
        assert_eq!(Format::Json.to_string(), "json");
    }
}
