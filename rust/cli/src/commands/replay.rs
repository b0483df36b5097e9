//! Replay command handler.
//!
//! Prints the chronological event list of one game: every play with the trick
//! it had to beat and the card counts after it, then the game-end summary.

use super::{NO_GAMES, load_session};
use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::{csv_field, format_event};
use crate::ui;
use std::io::Write;
use tricklog_engine::replay::events;

/// Handle the replay command.
///
/// # Arguments
///
/// * `input` - Path to the simulator log
/// * `game` - 0-based index of the game to replay
/// * `format` - Output format override; falls back to the configured format
/// * `out` - Output stream for the event list
/// * `err` - Error stream for warnings and errors
///
/// # Returns
///
/// `Ok(())` on success; `Err(CliError)` if the file cannot be read or `game` is out of range
pub fn handle_replay_command(
    input: String,
    game: usize,
    format: Option<OutputFormat>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let (session, cfg) = load_session(&input, err)?;
    if session.is_empty() {
        writeln!(out, "{}", NO_GAMES)?;
        return Ok(());
    }

    let selected = session.game(game).map_err(|e| {
        let _ = ui::write_error(err, &e.to_string());
        CliError::from(e)
    })?;
    let list = events(selected);

    match format.unwrap_or(cfg.format) {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&list)?)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "type,round,player,to_beat,cards_played,tracked_hand")?;
            for ev in &list {
                writeln!(
                    out,
                    "{},{},{},{},{},{}",
                    ev.kind.as_str(),
                    ev.round,
                    csv_field(&ev.player),
                    csv_field(&ev.to_beat),
                    csv_field(&ev.cards_played),
                    csv_field(&ev.tracked_hand)
                )?;
            }
        }
        OutputFormat::Table => {
            writeln!(out, "Game #{} ({} plays)", selected.game_number, selected.rounds.len())?;
            writeln!(out, "═══════════════════════════════════════")?;
            for ev in &list {
                writeln!(out, "{}", format_event(ev))?;
            }
        }
    }
    Ok(())
}
