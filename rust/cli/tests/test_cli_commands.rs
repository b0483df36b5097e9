//! End-to-end command tests driving `tricklog_cli::run` with in-memory streams.

use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

const MATCH_LOG: &str = "Starting Game 1
Player1: You were dealt: '3D' '5C' '9H'
Player2: You were dealt: '4D' '6C' 'TH'
Player3: You were dealt: '3C' '7C' 'JH'
To beat: 'None'
Player1: played: '3D'
Player2: played: '4D'
Player3 passed
Player2 won the round
Player2: played: '6C' 'TH'
Player2 won the game
Player1: finished with 1 points
Player2: finished with 5 points
Player3: finished with 0 points
Starting Game 2
Player1: You were dealt: '4C' '6H'
Player3: You were dealt: '3S' 'QC'
Player3: played: '3S'
Player1: played: '4C' '6H'
Player1 won the game
Player1: finished with 4 points
Player3: finished with 2 points
";

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
fn games_lists_both_games() {
    let log = log_file(MATCH_LOG);
    let (code, out, _) = run(&["games", "--input", log.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    let rows: Vec<&str> = out.lines().skip(2).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("0      1"));
    assert!(rows[0].ends_with("Player2"));
    assert!(rows[1].ends_with("Player1"));
}

#[test]
#[serial]
fn replay_prints_events_and_winner() {
    let log = log_file(MATCH_LOG);
    let (code, out, _) = run(&["replay", "--input", log.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(out.contains("Game #1 (3 plays)"));
    assert!(out.contains("Player2 played [4D] to beat 3D"));
    assert!(out.contains("Player2 played [6C, TH] to beat N/A"));
    assert!(out.contains("Game over, winner: Player2"));
}

#[test]
#[serial]
fn replay_format_flag_overrides_config() {
    let log = log_file(MATCH_LOG);
    let (code, out, _) = run(&[
        "replay",
        "--input",
        log.path().to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert_eq!(code, 0);
    let events: serde_json::Value = serde_json::from_str(&out).unwrap();
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(events[3]["type"], "game_end");
    assert_eq!(events[3]["player"], "Player2");
    assert_eq!(events[3]["card_counts"]["Player2"], 5);
}

#[test]
#[serial]
fn counts_csv_for_second_game() {
    let log = log_file(MATCH_LOG);
    let (code, out, _) = run(&[
        "counts",
        "--input",
        log.path().to_str().unwrap(),
        "--game",
        "1",
        "--format",
        "csv",
    ]);
    assert_eq!(code, 0);
    // Player2 keeps a column because labels accumulate across the session
    assert_eq!(
        out,
        "Round,Player1,Player2,Player3\n1,2,0,1\n2,0,0,1\n3,0,0,1\n"
    );
}

#[test]
#[serial]
fn stats_json_standings_use_last_game() {
    let log = log_file(MATCH_LOG);
    let (code, out, _) = run(&[
        "stats",
        "--input",
        log.path().to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let standings: Vec<(String, i64)> = json["standings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| {
            (
                s["player"].as_str().unwrap().to_string(),
                s["points"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        standings,
        vec![
            ("Player1".to_string(), 4),
            ("Player3".to_string(), 2),
            ("Player2".to_string(), 0),
        ]
    );
}

#[test]
#[serial]
fn stats_running_totals_csv() {
    let log = log_file(MATCH_LOG);
    let (code, out, _) = run(&[
        "stats",
        "--input",
        log.path().to_str().unwrap(),
        "--format",
        "csv",
        "--running",
    ]);
    assert_eq!(code, 0);
    assert_eq!(out, "Game,Player1,Player2,Player3\n1,1,5,0\n2,5,5,2\n");
}

#[test]
#[serial]
fn compressed_logs_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("match.log.zst");
    let packed = zstd::stream::encode_all(MATCH_LOG.as_bytes(), 3).unwrap();
    std::fs::write(&path, packed).unwrap();

    let (code, out, _) = run(&["games", "--input", path.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert_eq!(out.lines().count(), 4);
}

#[test]
#[serial]
fn tracked_player_comes_from_env() {
    let log = log_file(MATCH_LOG);
    unsafe { std::env::set_var("TRICKLOG_TRACKED_PLAYER", "Player3") };
    let (code, out, _) = run(&[
        "replay",
        "--input",
        log.path().to_str().unwrap(),
        "--game",
        "1",
    ]);
    unsafe { std::env::remove_var("TRICKLOG_TRACKED_PLAYER") };
    assert_eq!(code, 0);
    assert!(out.contains("Player3 played [3S] to beat N/A | cards: Player1=2 Player3=1 | hand: QC"));
}

#[test]
#[serial]
fn export_json_round_trips_session() {
    let log = log_file(MATCH_LOG);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("session.json");
    let (code, out, _) = run(&[
        "export",
        "--input",
        log.path().to_str().unwrap(),
        "--format",
        "json",
        "--output",
        output.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Exported 2 game(s)"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
    let games: Vec<tricklog_engine::Game> =
        serde_json::from_value(json["games"].clone()).unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[1].points.get("Player3"), Some(&2));
}
