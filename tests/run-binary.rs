use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use assert_cmd::prelude::*;
use difference::Changeset;
use serde_json::json;

use sokoban_levels::artifact::ArtifactFormatter;
use sokoban_levels::config::{Format, DEFAULT_DELIMITER};
use sokoban_levels::LoadCorpus;

const FIXTURE: &str = "levels/sasquatch-mini.txt";

fn out_path(name: &str) -> PathBuf {
    // tests run in parallel, every test gets its own file
    env::temp_dir().join(format!("sokoban-levels-{}-{}", std::process::id(), name))
}

fn assert_same(expected: &str, got: &str) {
    if expected != got {
        println!("{}", Changeset::new(expected, got, "\n"));
        panic!("generated file differs");
    }
}

#[test]
fn run_js() {
    let out = out_path("levels.js");

    let output = Command::main_binary()
        .unwrap()
        .arg(FIXTURE)
        .arg(&out)
        .output()
        .unwrap();
    output.clone().assert().success().stderr("");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(&format!("Generated {} with:\n", out.display())));
    for line in &["setI", "setII", "setIII", "Total"] {
        assert!(stdout.contains(line), "missing {} in:\n{}", line, stdout);
    }

    let corpus = FIXTURE.load_corpus(DEFAULT_DELIMITER).unwrap();
    let expected = ArtifactFormatter::new(&corpus, Format::Js).to_string();
    let got = fs::read_to_string(&out).unwrap();
    fs::remove_file(&out).unwrap();
    assert_same(&expected, &got);
    assert!(got.contains("const LevelManager = {"));
}

#[test]
fn run_json() {
    let out = out_path("levels.json");

    Command::main_binary()
        .unwrap()
        .arg("--json")
        .arg(FIXTURE)
        .arg(&out)
        .assert()
        .success()
        .stderr("");

    let got = fs::read_to_string(&out).unwrap();
    fs::remove_file(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&got).unwrap();

    assert_eq!(value["demo"], json!(["#####", "#@$.#", "#####"]));
    assert_eq!(value["setI"].as_array().unwrap().len(), 3);
    assert_eq!(value["setII"].as_array().unwrap().len(), 2);
    assert_eq!(
        value["setIII"],
        json!([
            ["#####", "#.  ##", "#@$$ #", "##   #", " ##  #", "  ##.#", "   ###"],
            [
                "      #####",
                "      #.  #",
                "      #.# #",
                "#######.# #",
                "# @ $ $ $ #",
                "# # # # ###",
                "#       #",
                "#########"
            ]
        ])
    );
}

#[test]
fn run_custom_delimiter() {
    let out = out_path("no-sets.json");

    Command::main_binary()
        .unwrap()
        .arg("--json")
        .arg("--delimiter")
        .arg("; Not In This File")
        .arg(FIXTURE)
        .arg(&out)
        .assert()
        .success();

    let got = fs::read_to_string(&out).unwrap();
    fs::remove_file(&out).unwrap();
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&got).unwrap(),
        json!({ "demo": ["#####", "#@$.#", "#####"] })
    );
}

#[test]
fn run_missing_input() {
    Command::main_binary()
        .unwrap()
        .arg("levels/does-not-exist.txt")
        .arg(out_path("never-written.js"))
        .assert()
        .failure();
}

#[test]
fn run_bad_formatting_args() {
    // doesn't check stderr - it's not deterministic
    // it sometimes complains about --js and sometimes about --json
    // hopefully should be enough to test that it fails and doesn't print to stdout

    Command::main_binary()
        .unwrap()
        .arg("--js")
        .arg("--json")
        .arg(FIXTURE)
        .assert()
        .failure()
        .stdout("");
}
