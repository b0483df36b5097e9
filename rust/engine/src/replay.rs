//! Secondary views derived from one closed [`Game`].
//!
//! Absent players and missing snapshots read as `0` / empty here; the
//! [`Game`] itself only holds what the log stated.

use crate::game::{Game, Points};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Placeholder for a play that had nothing to beat.
pub const NO_TO_BEAT: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCountRow {
    /// 1-based snapshot index.
    pub round: usize,
    /// One value per entry of [`CardCountTable::players`].
    pub counts: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCountTable {
    pub players: Vec<String>,
    pub rows: Vec<CardCountRow>,
}

impl CardCountTable {
    pub fn count(&self, round: usize, player: &str) -> Option<u32> {
        let col = self.players.iter().position(|p| p == player)?;
        let row = self.rows.iter().find(|r| r.round == round)?;
        row.counts.get(col).copied()
    }
}

/// One row per stored snapshot with a column for every known player.
pub fn card_count_table(game: &Game, players: &BTreeSet<String>) -> CardCountTable {
    let players: Vec<String> = players.iter().cloned().collect();
    let rows = game
        .card_counts
        .iter()
        .enumerate()
        .map(|(i, snapshot)| CardCountRow {
            round: i + 1,
            counts: players
                .iter()
                .map(|p| snapshot.get(p).copied().unwrap_or(0))
                .collect(),
        })
        .collect();
    CardCountTable { players, rows }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Play,
    GameEnd,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Play => "play",
            EventKind::GameEnd => "game_end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub round: usize,
    pub player: String,
    pub to_beat: String,
    pub cards_played: String,
    /// Card-count snapshot for plays; the final points, in log order, for `game_end`.
    pub card_counts: Points,
    pub tracked_hand: String,
}

/// Chronological events: one per play, then a single `game_end`.
pub fn events(game: &Game) -> Vec<Event> {
    let mut out: Vec<Event> = game
        .rounds
        .iter()
        .enumerate()
        .map(|(i, play)| Event {
            kind: EventKind::Play,
            round: i + 1,
            player: play.player.clone(),
            to_beat: play
                .to_beat
                .clone()
                .unwrap_or_else(|| NO_TO_BEAT.to_string()),
            cards_played: play.cards_played.join(", "),
            card_counts: game
                .card_counts
                .get(i)
                .map(|snap| snap.iter().map(|(p, &c)| (p.clone(), i64::from(c))).collect())
                .unwrap_or_default(),
            tracked_hand: game
                .tracked_hand
                .get(i)
                .map(|hand| hand.join(", "))
                .unwrap_or_default(),
        })
        .collect();

    out.push(Event {
        kind: EventKind::GameEnd,
        round: game.rounds.len() + 1,
        player: game.winner().unwrap_or_default().to_string(),
        to_beat: NO_TO_BEAT.to_string(),
        cards_played: String::new(),
        card_counts: game.points.clone(),
        tracked_hand: String::new(),
    });
    out
}
