//! Wire types for the line-delimited JSON protocol
//!
//! One JSON document per line in each direction, tagged by `type`. Requests
//! carry the client clock's offset in seconds east of UTC so the server can
//! resolve which calendar day the client is playing.

use serde::{Deserialize, Serialize};

use crate::core::{Game, LetterAnswer, Shape};

/// A client request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Fetch today's puzzle
    Game {
        #[serde(default)]
        tz_offset_secs: i32,
    },
    /// Submit a guess against today's puzzle
    Guess {
        guess: String,
        /// Which shape row the guess is played on
        #[serde(default)]
        guess_index: usize,
        /// Spend a full attempt: the guess is one whole-board word
        #[serde(default)]
        use_full: bool,
        #[serde(default)]
        tz_offset_secs: i32,
    },
}

/// A server response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// Today's puzzle, target withheld
    Game { date: String, game: PublicGame },
    /// Feedback for an accepted guess
    Guess {
        answer: Vec<LetterAnswer>,
        words: Vec<String>,
        won: bool,
    },
    /// The request was understood but cannot be played, or didn't parse
    Error { message: String },
}

impl Response {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

/// The day's puzzle as clients are allowed to see it
///
/// A deliberate subset of [`Game`]: the target word has no field here, so it
/// cannot leak into a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicGame {
    pub shape: Shape,
    pub full_attempts: u32,
}

impl From<&Game> for PublicGame {
    fn from(game: &Game) -> Self {
        Self {
            shape: game.shape.clone(),
            full_attempts: game.full_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_FULL_ATTEMPTS, LetterStatus, standard_shape};

    #[test]
    fn guess_request_parses() {
        let line = r#"{"type":"guess","guess":"testin","guess_index":1}"#;
        let request: Request = serde_json::from_str(line).unwrap();

        assert_eq!(
            request,
            Request::Guess {
                guess: "testin".to_string(),
                guess_index: 1,
                use_full: false,
                tz_offset_secs: 0,
            }
        );
    }

    #[test]
    fn game_request_defaults_to_utc() {
        let request: Request = serde_json::from_str(r#"{"type":"game"}"#).unwrap();
        assert_eq!(request, Request::Game { tz_offset_secs: 0 });
    }

    #[test]
    fn unknown_request_type_is_rejected() {
        assert!(serde_json::from_str::<Request>(r#"{"type":"restart"}"#).is_err());
        assert!(serde_json::from_str::<Request>(r#"{"guess":"tagless"}"#).is_err());
    }

    #[test]
    fn guess_response_wire_form() {
        let response = Response::Guess {
            answer: vec![LetterAnswer::new('a', LetterStatus::Correct)],
            words: vec!["a".to_string()],
            won: false,
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"type":"guess","answer":[{"letter":"a","status":3}],"words":["a"],"won":false}"#
        );
    }

    #[test]
    fn public_game_never_carries_the_target() {
        let game = Game::new("telling", standard_shape(), DEFAULT_FULL_ATTEMPTS);
        let response = Response::Game {
            date: "2026-08-24".to_string(),
            game: PublicGame::from(&game),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("telling"));
        assert!(!json.contains("target"));
        assert!(json.contains(r#""full_attempts":2"#));
    }
}
