//! Per-slot feedback for a scored guess
//!
//! Scoring colors every board slot the row covers: letters in the right
//! place, letters present elsewhere in the target, letters absent from it.
//! Duplicate letters are budgeted: the target's letter frequencies form a
//! pool, exact matches draw from it first, then misplaced letters draw left
//! to right until the pool runs dry.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Row;

/// Feedback for a single board slot
///
/// The wire and store form is the status's integer value, so the variant
/// order is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// No information yet; never produced by scoring
    #[default]
    Unknown,
    /// The letter does not appear in the target (or its budget is spent)
    NotInWord,
    /// The letter appears in the target, but not at this slot
    WrongPosition,
    /// The letter is exactly where the target has it
    Correct,
    /// The row does not cover this slot
    PositionNotUsed,
}

impl LetterStatus {
    /// Integer code used on the wire and in the store
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::NotInWord => 1,
            Self::WrongPosition => 2,
            Self::Correct => 3,
            Self::PositionNotUsed => 4,
        }
    }

    /// Decode an integer status code
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unknown),
            1 => Some(Self::NotInWord),
            2 => Some(Self::WrongPosition),
            3 => Some(Self::Correct),
            4 => Some(Self::PositionNotUsed),
            _ => None,
        }
    }
}

impl Serialize for LetterStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for LetterStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Self::from_u8(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid letter status {value}")))
    }
}

/// One scored board slot: the letter played there, if any, and its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterAnswer {
    pub letter: Option<char>,
    pub status: LetterStatus,
}

impl LetterAnswer {
    /// Feedback for a covered slot
    #[inline]
    #[must_use]
    pub const fn new(letter: char, status: LetterStatus) -> Self {
        Self {
            letter: Some(letter),
            status,
        }
    }

    /// Feedback for a slot the row leaves uncovered
    #[inline]
    #[must_use]
    pub const fn unused() -> Self {
        Self {
            letter: None,
            status: LetterStatus::PositionNotUsed,
        }
    }
}

/// Score a row's words against the target
///
/// `words` holds one word per segment of `row`, as produced by
/// [`Row::split_guess`]. The result has one entry per target letter, indexed
/// by board slot; slots the row leaves uncovered come back as
/// [`LetterAnswer::unused`].
///
/// # Algorithm
/// 1. Count every letter of the whole target. Uncovered slots still feed
///    the budget, so a partial row can report `WrongPosition` for a letter
///    it never covers.
/// 2. Place each word's letters at its segment's slots, presumed
///    `NotInWord`.
/// 3. Exact matches become `Correct` and spend one of their letter's budget.
/// 4. Remaining placed letters scan left to right; while budget remains for
///    a letter it becomes `WrongPosition` and spends one.
///
/// The caller guarantees one word per segment, each of its segment's length;
/// both are checked in debug builds.
///
/// # Examples
/// ```
/// use shardle::core::{score, LetterStatus, Row};
///
/// let row = Row::full(5);
/// let answer = score("robot", &row, &["boots".to_string()]);
///
/// let statuses: Vec<_> = answer.iter().map(|a| a.status).collect();
/// assert_eq!(
///     statuses,
///     vec![
///         LetterStatus::WrongPosition, // b
///         LetterStatus::Correct,       // o
///         LetterStatus::WrongPosition, // o
///         LetterStatus::WrongPosition, // t
///         LetterStatus::NotInWord,     // s
///     ]
/// );
/// ```
#[must_use]
pub fn score(target: &str, row: &Row, words: &[String]) -> Vec<LetterAnswer> {
    let starts = row.segment_starts();
    debug_assert_eq!(words.len(), starts.len(), "one word per segment");

    let target_letters: Vec<char> = target.chars().collect();
    let mut budget = letter_counts(target);
    let mut answer = vec![LetterAnswer::unused(); target_letters.len()];

    // Cover pass: place the played letters, presumed absent for now
    for (word, &start) in words.iter().zip(&starts) {
        for (offset, ch) in word.chars().enumerate() {
            debug_assert!(start + offset < answer.len(), "word overruns the board");
            answer[start + offset] = LetterAnswer::new(ch, LetterStatus::NotInWord);
        }
    }

    // Exact pass: correct slots claim their letter's budget first
    for (entry, &target_ch) in answer.iter_mut().zip(&target_letters) {
        if entry.letter == Some(target_ch) {
            entry.status = LetterStatus::Correct;
            if let Some(count) = budget.get_mut(&target_ch) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Misplaced pass: left to right, while budget lasts
    for entry in &mut answer {
        if entry.status == LetterStatus::Correct {
            continue;
        }
        if let Some(ch) = entry.letter
            && let Some(count) = budget.get_mut(&ch)
            && *count > 0
        {
            entry.status = LetterStatus::WrongPosition;
            *count -= 1;
        }
    }

    answer
}

/// Count each letter's occurrences in the target
fn letter_counts(target: &str) -> FxHashMap<char, u8> {
    let mut counts = FxHashMap::default();
    for ch in target.chars() {
        *counts.entry(ch).or_insert(0u8) += 1;
    }
    counts
}
