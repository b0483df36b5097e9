//! Data contract for pluggable card-playing strategies.
//!
//! These types describe what an external strategy receives and returns. The
//! log replay engine does not call into strategies; a host that runs
//! strategies against fixed scenarios implements [`Strategy`] and builds
//! [`MatchState`] values itself.

use serde::{Deserialize, Serialize};

/// Cards played together by one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub player_num: usize,
    pub cards: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    pub finished: bool,
    /// `None` while the game is still running.
    pub winner_player_num: Option<usize>,
    pub game_history: Vec<Vec<Trick>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub points: i64,
    pub hand_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub my_player_num: usize,
    pub players: Vec<PlayerInfo>,
    pub my_hand: Vec<String>,
    pub to_beat: Option<Trick>,
    pub match_history: Vec<GameHistory>,
    /// Private data carried between calls, opaque to the host.
    pub my_data: String,
}

/// What a strategy decided: the cards to play and its next private data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Empty means pass.
    pub cards: Vec<String>,
    pub data: String,
}

impl Action {
    pub fn pass(data: impl Into<String>) -> Self {
        Self {
            cards: Vec::new(),
            data: data.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Host-facing entry point for a card-playing strategy.
///
/// Given the current match state, returns the cards to play (empty to pass)
/// and the private data to hand back on the next call.
pub trait Strategy {
    fn get_action(&mut self, state: &MatchState) -> Action;
}
