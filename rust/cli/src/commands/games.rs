//! Game listing command.
//!
//! Prints one line per reconstructed game: its position (the index accepted
//! by `--game`), game number, play count, dealt players and winner.

use super::{NO_GAMES, emit, load_session};
use crate::error::CliError;
use crate::formatters::Grid;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct GameSummary<'a> {
    index: usize,
    game_number: u32,
    rounds: usize,
    players: Vec<&'a str>,
    winner: Option<&'a str>,
}

/// Handle the games command.
///
/// # Arguments
///
/// * `input` - Path to the simulator log (plain or `.zst`)
/// * `out` - Output stream for the listing
/// * `err` - Error stream for warnings and errors
pub fn handle_games_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let (session, cfg) = load_session(&input, err)?;
    if session.is_empty() {
        writeln!(out, "{}", NO_GAMES)?;
        return Ok(());
    }

    let summaries: Vec<GameSummary<'_>> = session
        .games
        .iter()
        .enumerate()
        .map(|(index, game)| GameSummary {
            index,
            game_number: game.game_number,
            rounds: game.rounds.len(),
            players: game.starting_hands.keys().map(String::as_str).collect(),
            winner: game.winner(),
        })
        .collect();

    let grid = Grid {
        headers: ["Index", "Game", "Rounds", "Players", "Winner"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: summaries
            .iter()
            .map(|s| {
                vec![
                    s.index.to_string(),
                    s.game_number.to_string(),
                    s.rounds.to_string(),
                    s.players.join(" "),
                    s.winner.unwrap_or("-").to_string(),
                ]
            })
            .collect(),
    };
    emit(out, cfg.format, &grid, &summaries)
}
