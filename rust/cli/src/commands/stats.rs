//! Cross-game points summary.
//!
//! Builds the points table over every game in the log (unrecorded points count
//! as 0) and the final standings taken from its last row.

use super::{NO_GAMES, load_session};
use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::{points_grid, render_csv, render_table, standings_grid};
use std::io::Write;
use tricklog_engine::report::{final_standings, points_table, running_totals};

/// Handles the stats command.
///
/// # Arguments
///
/// * `input` - Path to the simulator log
/// * `format` - Output format override; falls back to the configured format
/// * `running` - Show cumulative totals per game instead of per-game points
/// * `out` - Output stream for the report
/// * `err` - Output stream for warnings and errors
pub fn handle_stats_command(
    input: String,
    format: Option<OutputFormat>,
    running: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let (session, cfg) = load_session(&input, err)?;
    if session.is_empty() {
        writeln!(out, "{}", NO_GAMES)?;
        return Ok(());
    }

    let per_game = points_table(&session.games, &session.players);
    let table = if running {
        running_totals(&per_game)
    } else {
        per_game
    };
    let standings = final_standings(&table);

    match format.unwrap_or(cfg.format) {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "games": session.games.len(),
                "points": table,
                "standings": standings,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
        OutputFormat::Csv => {
            write!(out, "{}", render_csv(&points_grid(&table)))?;
        }
        OutputFormat::Table => {
            writeln!(out, "Points by game")?;
            write!(out, "{}", render_table(&points_grid(&table)))?;
            writeln!(out)?;
            writeln!(out, "Final standings")?;
            write!(out, "{}", render_table(&standings_grid(&standings)))?;
        }
    }
    Ok(())
}
