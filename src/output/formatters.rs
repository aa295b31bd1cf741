//! Formatting utilities for terminal output

use crate::core::{LetterAnswer, LetterStatus};

/// Emoji cell for a letter status
#[must_use]
pub const fn status_emoji(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '🟩',
        LetterStatus::WrongPosition => '🟨',
        LetterStatus::NotInWord => '⬛',
        LetterStatus::Unknown | LetterStatus::PositionNotUsed => '⬜',
    }
}

/// Share-grid line for one scored row
#[must_use]
pub fn answer_emoji(answer: &[LetterAnswer]) -> String {
    answer.iter().map(|a| status_emoji(a.status)).collect()
}

/// Share grid for a whole game, one line per scored row
#[must_use]
pub fn share_grid(rows: &[Vec<LetterAnswer>]) -> String {
    rows.iter()
        .map(|row| answer_emoji(row))
        .collect::<Vec<_>>()
        .join("\n")
}
