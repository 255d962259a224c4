//! Integration tests for the CLI binary
//!
//! Runs the offline commands end to end; server commands are covered by the
//! client unit tests.

use std::io::Write;
use std::process::{Command, Output};

fn cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_soundcoach-cli"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn score_exact_word() {
    let output = cli(&["score", "s", "Sunday"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("S (sunday): 100%"));
    assert!(!text.contains("Try this"));
}

#[test]
fn score_substitution_prints_remedy() {
    let output = cli(&["score", "L", "rove"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("20%"));
    assert!(text.contains("Try this"));
}

#[test]
fn score_unknown_sound_fails() {
    let output = cli(&["score", "Q", "queen"]);
    assert!(!output.status.success());
}

#[test]
fn check_catalog_accepts_valid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[sounds.K]\nword = \"kite\"\n\n[remedies]\nK = [\"The back of your tongue is used.\"]"
    )
    .unwrap();

    let output = cli(&["check-catalog", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("1 sounds, 1 remedies"));
}

#[test]
fn check_catalog_rejects_missing_word() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[sounds.K]\npronunciation = \"kaɪt\"").unwrap();

    let output = cli(&["check-catalog", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn help_lists_commands() {
    let output = cli(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["status", "sounds", "score", "practice", "check-catalog"] {
        assert!(text.contains(command), "missing {command}");
    }
}
