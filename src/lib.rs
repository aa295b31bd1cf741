//! Shardle
//!
//! A daily word game on a seven-slot board whose rows split guesses into
//! separate words. One game per calendar day: a TCP server scores guesses for
//! remote clients, and a terminal client plays the same game locally.
//!
//! # Quick Start
//!
//! ```rust
//! use shardle::core::{DEFAULT_FULL_ATTEMPTS, Game, standard_shape};
//!
//! let game = Game::new("robotic", standard_shape(), DEFAULT_FULL_ATTEMPTS);
//!
//! // The second row splits a guess into a four- and a two-letter word.
//! let row = &game.shape.rows()[1];
//! let words = row.split_guess("rockit").unwrap();
//! assert_eq!(words, vec!["rock".to_string(), "it".to_string()]);
//!
//! // One feedback entry per board slot, covered or not.
//! let answer = game.score_guess(row, &words);
//! assert_eq!(answer.len(), 7);
//! ```

// Core domain types
pub mod core;

// Game persistence
pub mod store;

// Word lists
pub mod wordlists;

// TCP game server
pub mod server;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
