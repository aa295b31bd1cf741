//! Board geometry: masked rows and how they carve a guess into words
//!
//! Every row of a puzzle is a mask over the board's slots. Maximal runs of
//! active slots form the row's segments, and a guess for that row must supply
//! exactly one word per segment. All operations here are pure functions of
//! the mask; nothing is cached or mutated.

use serde::{Deserialize, Serialize};

/// Board width of the daily game
pub const WORD_LENGTH: usize = 7;

/// One row of the board: a mask of active slots
///
/// Serialized as a plain array of booleans.
///
/// # Examples
/// ```
/// use shardle::core::Row;
///
/// let row = Row::new(vec![true, true, true, true, false, true, true]);
/// assert_eq!(row.segment_lengths(), vec![4, 2]);
/// assert_eq!(row.segment_starts(), vec![0, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Vec<bool>);

impl Row {
    /// Create a row from its slot mask
    #[must_use]
    pub const fn new(slots: Vec<bool>) -> Self {
        Self(slots)
    }

    /// Create a row with every slot active
    #[must_use]
    pub fn full(width: usize) -> Self {
        Self(vec![true; width])
    }

    /// The slot mask
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[bool] {
        &self.0
    }

    /// Total number of slots, active or not
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Number of active slots, i.e. how many characters a guess must supply
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|&&active| active).count()
    }

    /// Lengths of the row's segments, left to right
    ///
    /// A segment is a maximal run of active slots. An all-inactive row has no
    /// segments.
    #[must_use]
    pub fn segment_lengths(&self) -> Vec<usize> {
        let mut lengths = Vec::new();
        let mut run = 0;
        for &active in &self.0 {
            if active {
                run += 1;
            } else if run > 0 {
                lengths.push(run);
                run = 0;
            }
        }
        if run > 0 {
            lengths.push(run);
        }
        lengths
    }

    /// Starting slot index of each segment, left to right
    ///
    /// Pairs with [`segment_lengths`](Self::segment_lengths): the i-th
    /// segment covers `starts[i]..starts[i] + lengths[i]`.
    #[must_use]
    pub fn segment_starts(&self) -> Vec<usize> {
        let mut starts = Vec::new();
        let mut in_segment = false;
        for (i, &active) in self.0.iter().enumerate() {
            if active && !in_segment {
                starts.push(i);
            }
            in_segment = active;
        }
        starts
    }

    /// Split a guess into one word per segment
    ///
    /// Characters are consumed left to right, one per active slot; each
    /// segment start opens a new word. Returns `None` when the guess runs out
    /// of characters before the active slots do. Characters beyond the last
    /// active slot are ignored, so a too-long guess still splits; callers
    /// that care check the word lengths afterwards.
    ///
    /// # Examples
    /// ```
    /// use shardle::core::Row;
    ///
    /// let row = Row::new(vec![true, true, true, true, false, true, true]);
    /// assert_eq!(
    ///     row.split_guess("testin"),
    ///     Some(vec!["test".to_string(), "in".to_string()])
    /// );
    /// assert_eq!(row.split_guess("test"), None);
    /// ```
    #[must_use]
    pub fn split_guess(&self, guess: &str) -> Option<Vec<String>> {
        let mut words: Vec<String> = Vec::new();
        let mut chars = guess.chars();
        let mut prev = false;
        for &active in &self.0 {
            if active {
                let ch = chars.next()?;
                if prev && let Some(word) = words.last_mut() {
                    word.push(ch);
                } else {
                    words.push(ch.to_string());
                }
            }
            prev = active;
        }
        Some(words)
    }
}

impl From<Vec<bool>> for Row {
    fn from(slots: Vec<bool>) -> Self {
        Self::new(slots)
    }
}

/// A puzzle layout: the ordered rows a game is played through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape(Vec<Row>);

impl Shape {
    /// Create a shape from its rows
    #[must_use]
    pub const fn new(rows: Vec<Row>) -> Self {
        Self(rows)
    }

    /// The rows, in play order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the shape has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The row at `index`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.0.get(index)
    }
}

impl From<Vec<Row>> for Shape {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}
