//! Session export command.
//!
//! Writes the whole reconstructed session as a JSON document, a CSV of every
//! play, or a SQLite database with `games`, `rounds` and `points` tables.

use super::{NO_GAMES, load_session};
use crate::cli::ExportFormat;
use crate::error::CliError;
use crate::formatters::csv_field;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use chrono::{SecondsFormat, Utc};
use std::io::Write;
use std::path::Path;
use tricklog_engine::Session;

/// Handles the export command.
///
/// # Arguments
///
/// * `input` - Path to the simulator log
/// * `output` - Path to output file
/// * `format` - Output format
/// * `out` - Output stream for status messages
/// * `err` - Output stream for error messages
pub fn handle_export_command(
    input: String,
    output: String,
    format: ExportFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let (session, _) = load_session(&input, err)?;
    if session.is_empty() {
        writeln!(out, "{}", NO_GAMES)?;
        return Ok(());
    }

    ensure_parent_dir(Path::new(&output)).map_err(|msg| {
        let _ = ui::write_error(err, &msg);
        CliError::InvalidInput(msg)
    })?;

    let result = match format {
        ExportFormat::Json => export_json(&session, &output),
        ExportFormat::Csv => export_csv(&session, &output),
        ExportFormat::Sqlite => export_sqlite(&session, &output),
    };
    if let Err(e) = &result {
        ui::write_error(err, &format!("Failed to write {}: {}", output, e))?;
    }
    result?;

    writeln!(
        out,
        "Exported {} game(s) to {}",
        session.games.len(),
        output
    )?;
    Ok(())
}

fn export_json(session: &Session, output: &str) -> Result<(), CliError> {
    let doc = serde_json::json!({
        "generated_at": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        "players": session.players,
        "games": session.games,
        "stats": session.stats,
    });
    std::fs::write(output, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}

fn export_csv(session: &Session, output: &str) -> Result<(), CliError> {
    let mut w = std::fs::File::create(output).map(std::io::BufWriter::new)?;
    writeln!(w, "game,round,player,to_beat,cards_played")?;
    for game in &session.games {
        for (i, play) in game.rounds.iter().enumerate() {
            writeln!(
                w,
                "{},{},{},{},{}",
                game.game_number,
                i + 1,
                csv_field(&play.player),
                csv_field(play.to_beat.as_deref().unwrap_or("")),
                csv_field(&play.cards_played.join(" "))
            )?;
        }
    }
    w.flush()?;
    Ok(())
}

fn sqlite_err(context: &str, e: rusqlite::Error) -> CliError {
    CliError::InvalidInput(format!("{}: {}", context, e))
}

fn export_sqlite(session: &Session, output: &str) -> Result<(), CliError> {
    let mut conn =
        rusqlite::Connection::open(output).map_err(|e| sqlite_err("open database", e))?;
    let tx = conn
        .transaction()
        .map_err(|e| sqlite_err("start transaction", e))?;

    tx.execute_batch(
        "DROP TABLE IF EXISTS rounds;
         DROP TABLE IF EXISTS points;
         DROP TABLE IF EXISTS games;
         CREATE TABLE games (
             seq INTEGER NOT NULL PRIMARY KEY,
             game_number INTEGER NOT NULL,
             rounds INTEGER NOT NULL
         );
         CREATE TABLE rounds (
             game_seq INTEGER NOT NULL REFERENCES games(seq),
             round INTEGER NOT NULL,
             player TEXT NOT NULL,
             to_beat TEXT,
             cards_played TEXT NOT NULL,
             PRIMARY KEY (game_seq, round)
         );
         CREATE TABLE points (
             game_seq INTEGER NOT NULL REFERENCES games(seq),
             player TEXT NOT NULL,
             points INTEGER NOT NULL,
             PRIMARY KEY (game_seq, player)
         );",
    )
    .map_err(|e| sqlite_err("create schema", e))?;

    {
        let mut game_stmt = tx
            .prepare("INSERT INTO games (seq, game_number, rounds) VALUES (?1, ?2, ?3)")
            .map_err(|e| sqlite_err("prepare insert", e))?;
        let mut round_stmt = tx
            .prepare(
                "INSERT INTO rounds (game_seq, round, player, to_beat, cards_played)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .map_err(|e| sqlite_err("prepare insert", e))?;
        let mut points_stmt = tx
            .prepare("INSERT INTO points (game_seq, player, points) VALUES (?1, ?2, ?3)")
            .map_err(|e| sqlite_err("prepare insert", e))?;

        for (seq, game) in session.games.iter().enumerate() {
            let seq = seq as i64;
            game_stmt
                .execute(rusqlite::params![
                    seq,
                    game.game_number,
                    game.rounds.len() as i64
                ])
                .map_err(|e| sqlite_err("insert game", e))?;
            for (i, play) in game.rounds.iter().enumerate() {
                round_stmt
                    .execute(rusqlite::params![
                        seq,
                        (i + 1) as i64,
                        &play.player,
                        play.to_beat.as_deref(),
                        play.cards_played.join(" ")
                    ])
                    .map_err(|e| sqlite_err("insert round", e))?;
            }
            for (player, points) in &game.points {
                points_stmt
                    .execute(rusqlite::params![seq, player, points])
                    .map_err(|e| sqlite_err("insert points", e))?;
            }
        }
    }

    tx.commit().map_err(|e| sqlite_err("commit export", e))?;
    Ok(())
}
