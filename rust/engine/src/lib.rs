//! # tricklog-engine: card-game log replay reconstruction
//!
//! Turns the free-form text log of a multi-round card-game simulator into
//! typed games, rounds and snapshots that a visualization layer can chart.
//!
//! ## Core Modules
//!
//! - [`tokens`] - Player labels, quoted card codes and game numbers pulled out of a line
//! - [`line`] - Priority-ordered classifier over the six recognized line shapes
//! - [`session`] - Line-by-line state machine building the in-progress game
//! - [`assembler`] - Whole-log driver returning a [`Session`]
//! - [`game`] - Reconstructed game, round and snapshot records
//! - [`replay`] - Per-game card-count table and event list
//! - [`report`] - Cross-game points table and final standings
//! - [`strategy`] - Data contract for external card-playing strategies
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use tricklog_engine::{parse_session, replay, report};
//!
//! let log = "Starting Game 1\n\
//!            Player1: You were dealt: '3D' '4D'\n\
//!            Player2: You were dealt: '5D' '6D'\n\
//!            Player1: played: '3D'\n\
//!            Player2: played: '5D'\n\
//!            Player1: finished with 2 points\n\
//!            Player2: finished with 5 points\n";
//!
//! let session = parse_session(log);
//! let game = &session.games[0];
//!
//! let table = replay::card_count_table(game, &session.players);
//! assert_eq!(table.rows.len(), 2);
//!
//! let events = replay::events(game);
//! assert_eq!(events.last().map(|e| e.player.as_str()), Some("Player2"));
//!
//! let points = report::points_table(&session.games, &session.players);
//! let standings = report::final_standings(&points);
//! assert_eq!(standings[0].player, "Player2");
//! ```

pub mod assembler;
pub mod errors;
pub mod game;
pub mod line;
pub mod replay;
pub mod report;
pub mod session;
pub mod strategy;
pub mod tokens;

pub use assembler::{parse_session, parse_session_with};
pub use errors::{ParseError, ReplayError};
pub use game::{CardCounts, Game, Points, RoundPlay};
pub use session::{ParseOptions, ParseStats, Session, SessionState};
