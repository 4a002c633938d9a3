// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
#![warn(clippy::all)]

pub mod artifact;
pub mod config;
pub mod corpus;
pub mod data;
pub mod fs;
pub mod level;
pub mod map_formatter;
pub mod parser;
pub mod summary;
pub mod vec2d;

use std::path::Path;

use log::info;

use crate::artifact::ArtifactFormatter;
use crate::config::Config;
use crate::corpus::Corpus;
use crate::fs::ConvertErr;

pub trait LoadCorpus {
    fn load_corpus(&self, delimiter: &str) -> Result<Corpus, ConvertErr>;
}

impl<P: AsRef<Path> + ?Sized> LoadCorpus for P {
    fn load_corpus(&self, delimiter: &str) -> Result<Corpus, ConvertErr> {
        let text = fs::read_file(self)?;
        Ok(Corpus::parse(&text, delimiter))
    }
}

/// Reads the corpus, writes the artifact and returns the corpus for reporting.
pub fn convert(config: &Config) -> Result<Corpus, ConvertErr> {
    info!("Reading {}", config.input.display());
    let corpus = config.input.load_corpus(&config.delimiter)?;
    corpus.audit();

    let artifact = ArtifactFormatter::new(&corpus, config.format).to_string();
    info!("Writing {} as {}", config.output.display(), config.format);
    fs::write_file(&config.output, &artifact)?;
    Ok(corpus)
}
