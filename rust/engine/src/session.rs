//! Line-by-line session state machine.
//!
//! [`SessionState`] consumes log lines strictly in order and mutates the
//! in-progress [`Game`]. Only the set of player labels survives a game
//! boundary; running card counts, the tracked hand and the current trick to
//! beat are reset whenever a new game starts.

use crate::game::{CardCounts, Game, RoundPlay};
use crate::line::{classify, LineShape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Player whose remaining hand is tracked when none is configured.
pub const DEFAULT_TRACKED_PLAYER: &str = "Player1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Label of the player whose remaining hand is followed play by play.
    pub tracked_player: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tracked_player: DEFAULT_TRACKED_PLAYER.to_string(),
        }
    }
}

/// Line counters gathered during one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub lines: usize,
    pub recognized: usize,
    pub malformed: usize,
    pub unrecognized: usize,
    /// Played lines skipped because the player had no running count.
    pub ignored_plays: usize,
    /// Game headers closed without a single recorded play.
    pub dropped_games: usize,
}

/// Result of a full pass: closed games plus every label seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub games: Vec<Game>,
    pub players: BTreeSet<String>,
    #[serde(default)]
    pub stats: ParseStats,
}

#[derive(Debug)]
pub struct SessionState {
    options: ParseOptions,
    games: Vec<Game>,
    players: BTreeSet<String>,
    current: Game,
    running: CardCounts,
    tracked: Vec<String>,
    to_beat: Option<String>,
    stats: ParseStats,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

impl SessionState {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            games: Vec::new(),
            players: BTreeSet::new(),
            current: Game::default(),
            running: CardCounts::new(),
            tracked: Vec::new(),
            to_beat: None,
            stats: ParseStats::default(),
        }
    }

    /// Classifies one line and applies its transition.
    pub fn apply(&mut self, line: &str) {
        self.stats.lines += 1;
        let shape = classify(line);
        match shape {
            LineShape::GameStart { game_number } => self.start_game(game_number),
            LineShape::Dealt { player, cards } => self.deal(player, cards),
            LineShape::ToBeat { card } => {
                trace!(to_beat = ?card, "trick to beat updated");
                self.to_beat = card;
            }
            LineShape::Finished { player, points } => {
                trace!(player = %player, points, "points recorded");
                self.players.insert(player.clone());
                self.current.points.insert(player, points);
            }
            LineShape::Played { player, cards } => self.play(player, cards),
            LineShape::Won { player } => self.win(player),
            LineShape::Malformed { shape, error } => {
                self.stats.malformed += 1;
                debug!(
                    line_no = self.stats.lines,
                    shape = %shape,
                    reason = %error,
                    "skipping malformed line"
                );
                return;
            }
            LineShape::Unrecognized => {
                self.stats.unrecognized += 1;
                return;
            }
        }
        self.stats.recognized += 1;
    }

    /// Closes the in-progress game and returns everything reconstructed.
    pub fn finish(mut self) -> Session {
        self.close_current();
        debug!(
            games = self.games.len(),
            players = self.players.len(),
            lines = self.stats.lines,
            malformed = self.stats.malformed,
            "session parsed"
        );
        Session {
            games: self.games,
            players: self.players,
            stats: self.stats,
        }
    }

    fn close_current(&mut self) {
        let game = std::mem::take(&mut self.current);
        if game.has_rounds() {
            debug!(
                game_number = game.game_number,
                rounds = game.rounds.len(),
                "game closed"
            );
            self.games.push(game);
        } else if game != Game::default() {
            self.stats.dropped_games += 1;
            debug!(game_number = game.game_number, "dropping game without plays");
        }
    }

    fn start_game(&mut self, game_number: u32) {
        self.close_current();
        self.current = Game::new(game_number);
        self.running.clear();
        self.tracked.clear();
        self.to_beat = None;
    }

    fn deal(&mut self, player: String, cards: Vec<String>) {
        let size = u32::try_from(cards.len()).unwrap_or(u32::MAX);
        self.running.insert(player.clone(), size);
        if player == self.options.tracked_player {
            self.tracked = cards.clone();
        }
        self.players.insert(player.clone());
        self.current.starting_hands.insert(player, cards);
    }

    fn play(&mut self, player: String, cards: Vec<String>) {
        let Some(count) = self.running.get_mut(&player) else {
            self.stats.ignored_plays += 1;
            debug!(player = %player, "play by player without a dealt hand ignored");
            return;
        };
        let played = u32::try_from(cards.len()).unwrap_or(u32::MAX);
        *count = count.saturating_sub(played);

        if player == self.options.tracked_player {
            for card in &cards {
                if let Some(pos) = self.tracked.iter().position(|c| c == card) {
                    self.tracked.remove(pos);
                }
            }
        }

        let next_to_beat = cards.last().cloned();
        self.players.insert(player.clone());
        self.current.rounds.push(RoundPlay {
            player,
            cards_played: cards,
            to_beat: self.to_beat.take(),
        });
        self.current.card_counts.push(self.running.clone());
        self.current.tracked_hand.push(self.tracked.clone());
        self.to_beat = next_to_beat;
    }

    fn win(&mut self, player: String) {
        if let Some(count) = self.running.get_mut(&player) {
            *count = 0;
            self.current.card_counts.push(self.running.clone());
        }
        if player == self.options.tracked_player {
            self.tracked.clear();
        }
        self.current.tracked_hand.push(self.tracked.clone());
        self.players.insert(player);
        self.to_beat = None;
    }
}
