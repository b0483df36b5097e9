//! Command handler modules for the tricklog CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod counts;
mod export;
mod games;
mod replay;
mod stats;

pub use cfg::handle_cfg_command;
pub use counts::handle_counts_command;
pub use export::handle_export_command;
pub use games::handle_games_command;
pub use replay::handle_replay_command;
pub use stats::handle_stats_command;

use crate::config::{self, Config, OutputFormat};
use crate::error::CliError;
use crate::formatters::{Grid, render_csv, render_table};
use crate::io_utils::read_text_auto;
use crate::ui;
use serde::Serialize;
use std::io::Write;
use tricklog_engine::{ParseOptions, Session, parse_session_with};

/// Message printed when a log holds no game with a recorded play.
pub(crate) const NO_GAMES: &str = "No games found in log.";

/// Reads `input`, resolves configuration and runs the parser.
pub(crate) fn load_session(
    input: &str,
    err: &mut dyn Write,
) -> Result<(Session, Config), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let content = read_text_auto(input).map_err(|e| {
        let msg = format!("Failed to read {}: {}", input, e);
        let _ = ui::write_error(err, &msg);
        CliError::InvalidInput(msg)
    })?;

    let options = ParseOptions {
        tracked_player: cfg.tracked_player.clone(),
    };
    let session = parse_session_with(&content, &options);
    tracing::info!(
        input,
        games = session.games.len(),
        players = session.players.len(),
        malformed = session.stats.malformed,
        "log parsed"
    );
    if session.stats.malformed > 0 {
        ui::display_warning(
            err,
            &format!("Skipped {} malformed line(s)", session.stats.malformed),
        )?;
    }
    Ok((session, cfg))
}

/// Writes `grid` as a table or CSV, or `value` as pretty JSON.
pub(crate) fn emit<T: Serialize>(
    out: &mut dyn Write,
    format: OutputFormat,
    grid: &Grid,
    value: &T,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write!(out, "{}", render_table(grid))?,
        OutputFormat::Csv => write!(out, "{}", render_csv(grid))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
    }
    Ok(())
}
