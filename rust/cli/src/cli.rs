//! Command-line argument definitions.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "tricklog", version, about = "Replay card-game simulator logs")]
pub struct TricklogCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the games reconstructed from a log
    Games {
        #[arg(long)]
        input: String,
    },
    /// Print the play-by-play event list of one game
    Replay {
        #[arg(long)]
        input: String,
        /// 0-based game index
        #[arg(long, default_value_t = 0)]
        game: usize,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the per-round card-count table of one game
    Counts {
        #[arg(long)]
        input: String,
        #[arg(long, default_value_t = 0)]
        game: usize,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the cross-game points table and final standings
    Stats {
        #[arg(long)]
        input: String,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Show cumulative points instead of per-game points
        #[arg(long)]
        running: bool,
    },
    /// Export the whole reconstructed session
    Export {
        #[arg(long)]
        input: String,
        #[arg(long, value_enum)]
        format: ExportFormat,
        #[arg(long)]
        output: String,
    },
    /// Display the resolved configuration
    Cfg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Sqlite,
}
