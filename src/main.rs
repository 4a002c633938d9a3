// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![warn(clippy::all)]

use std::env;
use std::path::PathBuf;
use std::process;

use clap::{App, Arg, ArgGroup};

use sokoban_levels::config::{Config, Format, DEFAULT_DELIMITER};
use sokoban_levels::summary::Summary;

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-levels")
        .author("martin-t")
        .version("0.1")
        .about("Converts a plain text sokoban level pack into a data file")
        .arg(
            Arg::with_name("js")
                .short("j")
                .long("js")
                .help("write a JavaScript module (default)"),
        )
        .arg(
            Arg::with_name("json")
                .short("J")
                .long("json")
                .help("write plain JSON"),
        )
        .group(ArgGroup::with_name("format").arg("js").arg("json"))
        .arg(
            Arg::with_name("delimiter")
                .short("d")
                .long("delimiter")
                .takes_value(true)
                .value_name("TOKEN")
                .help("text starting each level set"),
        )
        .arg(Arg::with_name("input").help("level pack to read [default: sokobanLevels.txt]"))
        .arg(Arg::with_name("output").help(
            "file to write [default: levels_complete.js or levels_complete.json]",
        ))
        .get_matches();

    let format = if matches.is_present("json") {
        Format::Json
    } else {
        Format::Js
    };
    let mut config = Config::new(format);
    if let Some(input) = matches.value_of("input") {
        config.input = PathBuf::from(input);
    }
    if let Some(output) = matches.value_of("output") {
        config.output = PathBuf::from(output);
    }
    config.delimiter = matches
        .value_of("delimiter")
        .unwrap_or(DEFAULT_DELIMITER)
        .to_string();

    let corpus = sokoban_levels::convert(&config).unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap_or_default();
        println!("Failed to convert in {}: {}", current_dir.display(), err);
        process::exit(1);
    });

    print!("{}", Summary::new(&corpus, &config.output));
}
