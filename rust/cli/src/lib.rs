//! # tricklog CLI Library
//!
//! Command-line host for the tricklog replay engine. It reads card-game
//! simulator logs, reconstructs the games they describe and prints or exports
//! the resulting tables.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["tricklog", "stats", "--input", "games.log"];
//! let code = tricklog_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `games`: List the games reconstructed from a log
//! - `replay`: Print the play-by-play event list of one game
//! - `counts`: Print the per-round card-count table of one game
//! - `stats`: Cross-game points table and final standings
//! - `export`: Write the whole session as JSON, CSV or SQLite
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;

use cli::{Commands, TricklogCli};
use commands::{
    handle_cfg_command, handle_counts_command, handle_export_command, handle_games_command,
    handle_replay_command, handle_stats_command,
};

pub use config::OutputFormat;
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success (including logs without any game), `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["tricklog", "--version"];
/// let code = tricklog_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["games", "replay", "counts", "stats", "export", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    logging::init_logging();

    let parsed = TricklogCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with a zero exit code
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: tricklog <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: tricklog --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Games { input } => handle_games_command(input, out, err),
                Commands::Replay {
                    input,
                    game,
                    format,
                } => handle_replay_command(input, game, format, out, err),
                Commands::Counts {
                    input,
                    game,
                    format,
                } => handle_counts_command(input, game, format, out, err),
                Commands::Stats {
                    input,
                    format,
                    running,
                } => handle_stats_command(input, format, running, out, err),
                Commands::Export {
                    input,
                    format,
                    output,
                } => handle_export_command(input, output, format, out, err),
                Commands::Cfg => handle_cfg_command(out, err),
            };
            match result {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    tracing::debug!(error = %e, "command failed");
                    exit_code::ERROR
                }
            }
        }
    }
}
