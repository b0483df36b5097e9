//! Per-round card-count table for one game.

use super::{NO_GAMES, emit, load_session};
use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::card_count_grid;
use crate::ui;
use std::io::Write;
use tricklog_engine::replay::card_count_table;

pub fn handle_counts_command(
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
    let table = card_count_table(selected, &session.players);
    emit(
        out,
        format.unwrap_or(cfg.format),
        &card_count_grid(&table),
        &table,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{TWO_GAMES, log_file};
    use serial_test::serial;

    fn counts(game: usize, format: OutputFormat) -> (Result<(), CliError>, String) {
        let log = log_file(TWO_GAMES);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_counts_command(
            log.path().to_str().unwrap().to_string(),
            game,
            Some(format),
            &mut out,
            &mut err,
        );
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    #[serial]
    fn csv_rows_per_snapshot() {
        let (result, out) = counts(0, OutputFormat::Csv);
        assert!(result.is_ok());
        assert_eq!(out, "Round,Player1,Player2\n1,2,3\n2,2,2\n3,2,0\n");
    }

    #[test]
    #[serial]
    fn json_table_for_second_game() {
        let (result, out) = counts(1, OutputFormat::Json);
        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["players"][0], "Player1");
        assert_eq!(json["rows"].as_array().unwrap().len(), 2);
        assert_eq!(json["rows"][0]["counts"][0], 0);
    }

    #[test]
    #[serial]
    fn unknown_game_is_error() {
        let (result, _) = counts(2, OutputFormat::Table);
        assert!(result.is_err());
    }
}
