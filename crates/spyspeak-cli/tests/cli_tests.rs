//! End-to-end tests for the `spyspeak` binary.
//!
//! Word material lives in per-test temp directories; single-word lists make
//! generation deterministic without touching the random source.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn spyspeak() -> Command {
    Command::cargo_bin("spyspeak").unwrap()
}

/// Write one-word adjective and noun files; returns their paths.
fn word_files(dir: &Path) -> (PathBuf, PathBuf) {
    let adj = dir.join("adjectives.txt");
    let nouns = dir.join("nouns.txt");
    fs::write(&adj, "brave\n").unwrap();
    fs::write(&nouns, "tiger\n").unwrap();
    (adj, nouns)
}

#[test]
fn generate_text_batch_is_newline_joined() {
    let tmp = tempfile::tempdir().unwrap();
    let (adj, nouns) = word_files(tmp.path());

    spyspeak()
        .args(["generate", "-c", "3"])
        .arg("-a")
        .arg(&adj)
        .arg("-n")
        .arg(&nouns)
        .assert()
        .success()
        .stdout("Brave Tiger\nBrave Tiger\nBrave Tiger\n");
}

#[test]
fn generate_json_has_codenames_key() {
    let tmp = tempfile::tempdir().unwrap();
    let (adj, nouns) = word_files(tmp.path());

    let output = spyspeak()
        .args(["generate", "-c", "2", "-f", "json"])
        .arg("-a")
        .arg(&adj)
        .arg("-n")
        .arg(&nouns)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let codenames = parsed["codenames"].as_array().unwrap();
    assert_eq!(codenames.len(), 2);
    assert_eq!(codenames[0], "Brave Tiger");
}

#[test]
fn generate_csv_uses_header_and_crlf() {
    let tmp = tempfile::tempdir().unwrap();
    let (adj, nouns) = word_files(tmp.path());

    spyspeak()
        .args(["generate", "-f", "csv"])
        .arg("-a")
        .arg(&adj)
        .arg("-n")
        .arg(&nouns)
        .assert()
        .success()
        .stdout("Codename\r\nBrave Tiger\r\n\n");
}

#[test]
fn generate_respects_separator_and_case() {
    let tmp = tempfile::tempdir().unwrap();
    let (adj, nouns) = word_files(tmp.path());

    spyspeak()
        .args(["generate", "-s", "-", "--case", "upper"])
        .arg("-a")
        .arg(&adj)
        .arg("-n")
        .arg(&nouns)
        .assert()
        .success()
        .stdout("BRAVE-TIGER\n");
}

#[test]
fn generate_writes_output_file() {
    let tmp = tempfile::tempdir().unwrap();
    let (adj, nouns) = word_files(tmp.path());
    let out = tmp.path().join("names.txt");

    spyspeak()
        .args(["generate", "-c", "2"])
        .arg("-a")
        .arg(&adj)
        .arg("-n")
        .arg(&nouns)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "Brave Tiger\nBrave Tiger");
}

#[test]
fn impossible_length_window_exits_with_user_error() {
    let tmp = tempfile::tempdir().unwrap();
    let (adj, nouns) = word_files(tmp.path());

    spyspeak()
        .args(["generate", "--min-length", "50"])
        .arg("-a")
        .arg(&adj)
        .arg("-n")
        .arg(&nouns)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("length"));
}

#[test]
fn missing_adjectives_file_exits_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let (_, nouns) = word_files(tmp.path());

    spyspeak()
        .arg("generate")
        .arg("-a")
        .arg(tmp.path().join("absent.txt"))
        .arg("-n")
        .arg(&nouns)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No words loaded"));
}

#[test]
fn unknown_pattern_is_rejected_at_parse_time() {
    spyspeak()
        .args(["generate", "--pattern", "verb-noun"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn themes_lists_complete_pairs_sorted() {
    let tmp = tempfile::tempdir().unwrap();
    for name in ["space_adj.txt", "space_nouns.txt", "animals_adj.txt", "animals_nouns.txt"] {
        fs::write(tmp.path().join(name), "word\n").unwrap();
    }
    fs::write(tmp.path().join("lonely_adj.txt"), "word\n").unwrap();

    spyspeak()
        .arg("themes")
        .arg("--dir")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("animals\nspace\n");
}

#[test]
fn generate_from_theme() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("space_adj.txt"), "cosmic\n").unwrap();
    fs::write(tmp.path().join("space_nouns.txt"), "nebula\n").unwrap();

    spyspeak()
        .args(["generate", "--theme", "space"])
        .arg("--themes-dir")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("Cosmic Nebula\n");
}

#[test]
fn unknown_theme_exits_not_found() {
    let tmp = tempfile::tempdir().unwrap();

    spyspeak()
        .args(["generate", "--theme", "ghost"])
        .arg("--themes-dir")
        .arg(tmp.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("ghost"));
}

#[test]
fn favorites_add_list_remove_roundtrip() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("favorites.txt");

    spyspeak()
        .args(["favorites", "add", "Brave Tiger"])
        .arg("--file")
        .arg(&file)
        .assert()
        .success();

    // Duplicate add succeeds but persists nothing new.
    spyspeak()
        .args(["favorites", "add", "Brave Tiger"])
        .arg("--file")
        .arg(&file)
        .assert()
        .success();

    spyspeak()
        .args(["favorites", "list"])
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout("1. Brave Tiger\n");

    spyspeak()
        .args(["favorites", "remove", "1"])
        .arg("--file")
        .arg(&file)
        .assert()
        .success();

    // Now out of range.
    spyspeak()
        .args(["favorites", "remove", "1"])
        .arg("--file")
        .arg(&file)
        .assert()
        .failure()
        .code(2);
}

#[test]
fn favorites_export_to_file_in_csv() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("favorites.txt");
    let out = tmp.path().join("export.csv");
    fs::write(&file, "Alpha One\nBeta Two\n").unwrap();

    spyspeak()
        .args(["favorites", "export"])
        .arg(&out)
        .args(["--format", "csv"])
        .arg("--file")
        .arg(&file)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Codename\r\nAlpha One\r\nBeta Two\r\n"
    );
}

#[test]
fn favorites_export_with_nothing_saved_is_user_error() {
    let tmp = tempfile::tempdir().unwrap();

    spyspeak()
        .args(["favorites", "export"])
        .arg("--file")
        .arg(tmp.path().join("favorites.txt"))
        .assert()
        .failure()
        .code(2);
}

#[test]
fn completions_bash_mentions_binary() {
    spyspeak()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spyspeak"));
}

#[test]
fn quiet_and_verbose_conflict() {
    spyspeak()
        .args(["--quiet", "--verbose", "themes"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn config_file_supplies_generation_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let (adj, nouns) = word_files(tmp.path());
    let config = tmp.path().join("config.toml");
    fs::write(
        &config,
        "[defaults]\ncount = 2\ncase = \"lower\"\nseparator = \"_\"\n",
    )
    .unwrap();

    spyspeak()
        .arg("--config")
        .arg(&config)
        .arg("generate")
        .arg("-a")
        .arg(&adj)
        .arg("-n")
        .arg(&nouns)
        .assert()
        .success()
        .stdout("brave_tiger\nbrave_tiger\n");
}
