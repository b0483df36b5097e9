//! Priority-ordered classification of log lines.
//!
//! Each recognized shape is detected by a fixed substring marker. Checks run in
//! the order of [`ShapeKind::PRIORITY`] and the first marker found decides the
//! shape, even when payload extraction then fails.
//!
//! Player labels on `dealt` lines are taken from everything before the
//! `You were dealt` marker rather than before the first colon, so a tagged
//! line such as `Tag: Player1: You were dealt: '3D'` yields `Player1` and not
//! `Tag`. The tag is then stripped like on every other shape.

use crate::errors::ParseError;
use crate::tokens;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    GameStart,
    Dealt,
    ToBeat,
    Finished,
    Played,
    Won,
}

impl ShapeKind {
    pub const PRIORITY: [ShapeKind; 6] = [
        ShapeKind::GameStart,
        ShapeKind::Dealt,
        ShapeKind::ToBeat,
        ShapeKind::Finished,
        ShapeKind::Played,
        ShapeKind::Won,
    ];

    /// Substrings whose presence selects this shape.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            ShapeKind::GameStart => &["Starting Game"],
            ShapeKind::Dealt => &["You were dealt"],
            ShapeKind::ToBeat => &["To beat:"],
            ShapeKind::Finished => &["finished with"],
            ShapeKind::Played => &["played"],
            ShapeKind::Won => &["won the game", "won the round"],
        }
    }

    pub fn matches(self, line: &str) -> bool {
        self.markers().iter().any(|m| line.contains(m))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::GameStart => "game_start",
            ShapeKind::Dealt => "dealt",
            ShapeKind::ToBeat => "to_beat",
            ShapeKind::Finished => "finished",
            ShapeKind::Played => "played",
            ShapeKind::Won => "won",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified line with its extracted payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineShape {
    GameStart { game_number: u32 },
    Dealt { player: String, cards: Vec<String> },
    /// `card` is `None` for `To beat: 'None'` or when no card is quoted.
    ToBeat { card: Option<String> },
    Finished { player: String, points: i64 },
    Played { player: String, cards: Vec<String> },
    Won { player: String },
    /// A marker was found but its payload could not be extracted.
    Malformed { shape: ShapeKind, error: ParseError },
    Unrecognized,
}

impl LineShape {
    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            LineShape::GameStart { .. } => Some(ShapeKind::GameStart),
            LineShape::Dealt { .. } => Some(ShapeKind::Dealt),
            LineShape::ToBeat { .. } => Some(ShapeKind::ToBeat),
            LineShape::Finished { .. } => Some(ShapeKind::Finished),
            LineShape::Played { .. } => Some(ShapeKind::Played),
            LineShape::Won { .. } => Some(ShapeKind::Won),
            LineShape::Malformed { shape, .. } => Some(*shape),
            LineShape::Unrecognized => None,
        }
    }
}

/// Sentinel the simulator prints when there is nothing to beat.
pub const NO_TRICK: &str = "None";

pub fn classify(line: &str) -> LineShape {
    let Some(kind) = ShapeKind::PRIORITY.into_iter().find(|k| k.matches(line)) else {
        return LineShape::Unrecognized;
    };
    match extract(kind, line) {
        Ok(shape) => shape,
        Err(error) => LineShape::Malformed { shape: kind, error },
    }
}

fn extract(kind: ShapeKind, line: &str) -> Result<LineShape, ParseError> {
    match kind {
        ShapeKind::GameStart => {
            let game_number = tokens::game_number(line).ok_or(ParseError::MissingGameNumber)?;
            Ok(LineShape::GameStart { game_number })
        }
        ShapeKind::Dealt => {
            let player = tokens::label_before(line, "You were dealt")
                .ok_or(ParseError::MissingPlayer { marker: "You were dealt" })?;
            let cards = non_empty(tokens::card_codes(line))?;
            Ok(LineShape::Dealt { player, cards })
        }
        ShapeKind::ToBeat => {
            let card = tokens::card_codes(line)
                .into_iter()
                .next()
                .filter(|c| c != NO_TRICK);
            Ok(LineShape::ToBeat { card })
        }
        ShapeKind::Finished => {
            let player = tokens::label_before_word(line, "finished")
                .ok_or(ParseError::MissingPlayer { marker: "finished" })?;
            let words: Vec<&str> = line.split_whitespace().collect();
            let token = words
                .len()
                .checked_sub(2)
                .and_then(|i| words.get(i))
                .ok_or(ParseError::MissingPoints)?;
            let points = token.parse().map_err(|_| ParseError::InvalidPoints {
                token: token.to_string(),
            })?;
            Ok(LineShape::Finished { player, points })
        }
        ShapeKind::Played => {
            let player = tokens::label_before_word(line, "played")
                .ok_or(ParseError::MissingPlayer { marker: "played" })?;
            let cards = non_empty(tokens::card_codes(line))?;
            Ok(LineShape::Played { player, cards })
        }
        ShapeKind::Won => {
            let player =
                tokens::first_token_label(line).ok_or(ParseError::MissingPlayer { marker: "won" })?;
            Ok(LineShape::Won { player })
        }
    }
}

fn non_empty(cards: Vec<String>) -> Result<Vec<String>, ParseError> {
    if cards.is_empty() {
        Err(ParseError::MissingCards)
    } else {
        Ok(cards)
    }
}
