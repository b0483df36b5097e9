//! Drives a [`SessionState`] over a whole log.

use crate::errors::ReplayError;
use crate::game::Game;
use crate::session::{ParseOptions, Session, SessionState};

/// Parses a complete log with the default options.
///
/// Never fails: unparsable lines are skipped and whatever could be
/// reconstructed is returned.
///
/// ```
/// use tricklog_engine::parse_session;
///
/// let log = "Starting Game 1\n\
///            Player1: You were dealt: '3D' '4D' '5D'\n\
///            To beat: 'None'\n\
///            Player1: played: '3D' '4D' '5D'\n\
///            Player1: won the round\n\
///            Player1: finished with 0 points\n";
/// let session = parse_session(log);
/// assert_eq!(session.games.len(), 1);
/// assert_eq!(session.games[0].rounds[0].cards_played, vec!["3D", "4D", "5D"]);
/// ```
pub fn parse_session(text: &str) -> Session {
    parse_session_with(text, &ParseOptions::default())
}

pub fn parse_session_with(text: &str, options: &ParseOptions) -> Session {
    let mut state = SessionState::new(options.clone());
    for line in text.lines() {
        state.apply(line);
    }
    state.finish()
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// The explicit "no data" condition for logs that produced no games.
    pub fn require_data(&self) -> Result<&Self, ReplayError> {
        if self.is_empty() {
            Err(ReplayError::NoData)
        } else {
            Ok(self)
        }
    }

    /// Selects a game by its 0-based position in the session.
    pub fn game(&self, index: usize) -> Result<&Game, ReplayError> {
        self.require_data()?;
        self.games.get(index).ok_or(ReplayError::GameOutOfRange {
            index,
            available: self.games.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_data() {
        let session = parse_session("");
        assert!(session.is_empty());
        assert_eq!(session.require_data(), Err(ReplayError::NoData));
        assert_eq!(session.game(0), Err(ReplayError::NoData));
    }

    #[test]
    fn game_index_out_of_range() {
        let session = parse_session(
            "Starting Game 1\nPlayer1: You were dealt: '3D'\nPlayer1: played: '3D'\n",
        );
        assert!(session.game(0).is_ok());
        assert_eq!(
            session.game(3),
            Err(ReplayError::GameOutOfRange {
                index: 3,
                available: 1
            })
        );
    }

    #[test]
    fn handles_crlf_line_endings() {
        let session = parse_session(
            "Starting Game 7\r\nPlayer1: You were dealt: '3D'\r\nPlayer1: played: '3D'\r\n",
        );
        assert_eq!(session.games[0].game_number, 7);
        assert_eq!(session.games[0].rounds.len(), 1);
    }
}
