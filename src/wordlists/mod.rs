//! Word list loading
//!
//! The game runs against two files: a large dictionary of legal words and a
//! pool of seven-letter target candidates.

pub mod loader;

pub use loader::{load_dictionary, load_target_words};
