//! Core domain types for the daily game
//!
//! Everything here is pure: the dictionary trie, the board geometry, the
//! scorer, and the game record. No I/O and no clocks; those belong to the
//! store, server, and command layers.

mod answer;
mod game;
mod shape;
mod trie;

pub use answer::{LetterAnswer, LetterStatus, score};
pub use game::{DEFAULT_FULL_ATTEMPTS, Game, standard_shape};
pub use shape::{Row, Shape, WORD_LENGTH};
pub use trie::{InvalidWord, Trie};
