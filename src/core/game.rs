//! The daily game record and its rules

use serde::{Deserialize, Serialize};

use super::{LetterAnswer, Row, Shape, score};

/// Full-word attempts a standard game grants on top of its shape rows
pub const DEFAULT_FULL_ATTEMPTS: u32 = 2;

/// One day's puzzle: the target word, the row layout, and how many
/// out-of-turn full-word guesses are allowed
///
/// Serializes to the store document format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub target_word: String,
    pub shape: Shape,
    pub full_attempts: u32,
}

impl Game {
    #[must_use]
    pub fn new(target_word: impl Into<String>, shape: Shape, full_attempts: u32) -> Self {
        Self {
            target_word: target_word.into(),
            shape,
            full_attempts,
        }
    }

    /// Score a row's words against this game's target
    ///
    /// See [`score`] for the duplicate-letter budgeting rules.
    #[must_use]
    pub fn score_guess(&self, row: &Row, words: &[String]) -> Vec<LetterAnswer> {
        score(&self.target_word, row, words)
    }

    /// Whether a split guess wins the game
    ///
    /// Only a single word spanning the whole board can win, so rows that
    /// split into two words never do, whatever they spell.
    #[must_use]
    pub fn is_winning_guess(&self, words: &[String]) -> bool {
        matches!(words, [word] if *word == self.target_word)
    }
}

/// The six-row daily layout
///
/// One open row, three split rows, and two short single-word rows:
///
/// ```text
/// ■ ■ ■ ■ ■ ■ ■
/// ■ ■ ■ ■ · ■ ■
/// ■ ■ ■ · ■ ■ ■
/// ■ ■ · ■ ■ ■ ■
/// · · ■ ■ ■ · ·
/// · ■ ■ ■ ■ ■ ·
/// ```
#[must_use]
pub fn standard_shape() -> Shape {
    let rows = [
        [true, true, true, true, true, true, true],
        [true, true, true, true, false, true, true],
        [true, true, true, false, true, true, true],
        [true, true, false, true, true, true, true],
        [false, false, true, true, true, false, false],
        [false, true, true, true, true, true, false],
    ];
    Shape::new(rows.into_iter().map(|row| Row::new(row.to_vec())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, WORD_LENGTH};

    fn game(target: &str) -> Game {
        Game::new(target, standard_shape(), DEFAULT_FULL_ATTEMPTS)
    }

    #[test]
    fn standard_shape_layout() {
        let shape = standard_shape();

        assert_eq!(shape.len(), 6);
        assert!(shape.rows().iter().all(|row| row.width() == WORD_LENGTH));

        let lengths: Vec<_> = shape.rows().iter().map(Row::segment_lengths).collect();
        assert_eq!(
            lengths,
            vec![vec![7], vec![4, 2], vec![3, 3], vec![2, 4], vec![3], vec![5]]
        );

        let starts: Vec<_> = shape.rows().iter().map(Row::segment_starts).collect();
        assert_eq!(
            starts,
            vec![vec![0], vec![0, 5], vec![0, 4], vec![0, 3], vec![2], vec![1]]
        );
    }

    #[test]
    fn winning_guess_is_the_single_target_word() {
        let game = game("telling");

        assert!(game.is_winning_guess(&["telling".to_string()]));
        assert!(!game.is_winning_guess(&["tell".to_string(), "in".to_string()]));
        assert!(!game.is_winning_guess(&["tellers".to_string()]));
        assert!(!game.is_winning_guess(&[]));
    }

    #[test]
    fn split_words_never_win_even_if_they_spell_the_target() {
        let game = game("catdogs");

        assert!(!game.is_winning_guess(&["cat".to_string(), "dogs".to_string()]));
    }

    #[test]
    fn score_guess_matches_target() {
        let game = game("telling");
        let answer = game.score_guess(&Row::full(WORD_LENGTH), &["telling".to_string()]);

        assert!(answer.iter().all(|a| a.status == LetterStatus::Correct));
    }

    #[test]
    fn game_round_trips_through_json() {
        let original = game("robotic");
        let json = serde_json::to_string(&original).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();

        assert_eq!(back, original);
    }

    #[test]
    fn default_full_attempts() {
        assert_eq!(DEFAULT_FULL_ATTEMPTS, 2);
    }
}
