//! Exit code and error stream behavior.
//!
//! - Success, including a log without any game, returns `0`
//! - Unreadable input, bad configuration and unknown game indices return `2`
//! - Errors are written to stderr, never stdout

use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn log_file(content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(content.as_bytes()).unwrap();
    temp
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["tricklog"];
    argv.extend_from_slice(args);
    let code = tricklog_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn log_without_games_is_not_an_error() {
    let log = log_file("Shuffling deck\nStarting Game 1\nPlayer1: You were dealt: '3D'\n");
    for cmd in ["games", "replay", "counts", "stats"] {
        let (code, out, err) = run(&[cmd, "--input", log.path().to_str().unwrap()]);
        assert_eq!(code, 0, "{} should succeed", cmd);
        assert_eq!(out, "No games found in log.\n");
        assert!(err.is_empty());
    }

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("session.json");
    let (code, out, err) = run(&[
        "export",
        "--input",
        log.path().to_str().unwrap(),
        "--format",
        "json",
        "--output",
        output.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert_eq!(out, "No games found in log.\n");
    assert!(err.is_empty());
    assert!(!output.exists());
}

#[test]
#[serial]
fn missing_file_returns_two() {
    let (code, out, err) = run(&["stats", "--input", "/nonexistent/match.log"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Failed to read /nonexistent/match.log"));
}

#[test]
#[serial]
fn game_index_out_of_range_returns_two() {
    let log = log_file("Starting Game 1\nA: You were dealt: '3D'\nA: played: '3D'\n");
    let (code, out, err) = run(&[
        "replay",
        "--input",
        log.path().to_str().unwrap(),
        "--game",
        "3",
    ]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("game index 3 out of range (1 games available)"));
}

#[test]
#[serial]
fn malformed_lines_warn_but_succeed() {
    let log = log_file(
        "Starting Game 1\nA: You were dealt: '3D'\nA: played: '3D'\nA finished with N/A points\n",
    );
    let (code, _, err) = run(&["games", "--input", log.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(err.contains("WARNING: Skipped 1 malformed line(s)"));
}

#[test]
#[serial]
fn invalid_config_returns_two() {
    unsafe { std::env::set_var("TRICKLOG_FORMAT", "yaml") };
    let (code, _, err) = run(&["cfg"]);
    unsafe { std::env::remove_var("TRICKLOG_FORMAT") };
    assert_eq!(code, 2);
    assert!(err.contains("Invalid configuration"));
}

#[test]
fn missing_required_argument_returns_two() {
    let (code, _, err) = run(&["replay"]);
    assert_eq!(code, 2);
    assert!(err.contains("--input"));
}
