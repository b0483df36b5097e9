//! Reconstructed game records.
//!
//! A [`Game`] is built up by [`crate::session::SessionState`] during a single
//! forward pass and is not mutated once the session hands it out.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Card-count snapshot: running hand size per player.
pub type CardCounts = BTreeMap<String, u32>;

/// Points per player in the order the "finished with" lines appeared.
///
/// A repeated statement overwrites the value but keeps the first position.
pub type Points = IndexMap<String, i64>;

/// One detected "played" line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPlay {
    pub player: String,
    pub cards_played: Vec<String>,
    /// Card the play had to beat; `None` when there was nothing to beat.
    pub to_beat: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub game_number: u32,
    pub starting_hands: BTreeMap<String, Vec<String>>,
    /// Only filled from explicit "finished with N" statements.
    pub points: Points,
    pub rounds: Vec<RoundPlay>,
    pub card_counts: Vec<CardCounts>,
    pub tracked_hand: Vec<Vec<String>>,
}

impl Game {
    pub fn new(game_number: u32) -> Self {
        Self {
            game_number,
            ..Self::default()
        }
    }

    pub fn has_rounds(&self) -> bool {
        !self.rounds.is_empty()
    }

    /// Label with the highest recorded points.
    ///
    /// Ties go to the label whose points were stated first.
    pub fn winner(&self) -> Option<&str> {
        let mut best: Option<(&str, i64)> = None;
        for (player, &points) in &self.points {
            match best {
                Some((_, top)) if points <= top => {}
                _ => best = Some((player.as_str(), points)),
            }
        }
        best.map(|(player, _)| player)
    }

    /// Most recent card-count snapshot, if any play or win was recorded.
    pub fn final_counts(&self) -> Option<&CardCounts> {
        self.card_counts.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_prefers_highest_points() {
        let mut game = Game::new(1);
        game.points.insert("A".into(), 3);
        game.points.insert("B".into(), 9);
        game.points.insert("C".into(), -2);
        assert_eq!(game.winner(), Some("B"));
    }

    #[test]
    fn winner_tie_goes_to_first_stated() {
        let mut game = Game::new(1);
        game.points.insert("Zed".into(), 4);
        game.points.insert("Amy".into(), 4);
        assert_eq!(game.winner(), Some("Zed"));
    }

    #[test]
    fn restated_points_keep_first_position() {
        let mut game = Game::new(1);
        game.points.insert("Zed".into(), 1);
        game.points.insert("Amy".into(), 4);
        game.points.insert("Zed".into(), 4);
        let order: Vec<&str> = game.points.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["Zed", "Amy"]);
        assert_eq!(game.winner(), Some("Zed"));
    }

    #[test]
    fn winner_is_none_without_points() {
        assert_eq!(Game::new(2).winner(), None);
    }
}
