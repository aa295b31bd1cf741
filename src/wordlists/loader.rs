//! Word list loading utilities
//!
//! The dictionary and the target pool are plain newline-delimited files
//! named on the command line; nothing is embedded in the binary.

use crate::core::{Trie, WORD_LENGTH};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary file into a trie
///
/// One word per line. Lines are trimmed, empty lines skipped, and entries
/// that are not lowercase `a-z` skipped rather than failing the whole load.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use shardle::wordlists::loader::load_dictionary;
///
/// let dict = load_dictionary("wordlists/dict.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Trie> {
    let content = fs::read_to_string(path)?;

    let mut trie = Trie::new();
    for line in content.lines() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        trie.insert(word).ok();
    }
    Ok(trie)
}

/// Load the target-word pool
///
/// Keeps only entries that are exactly [`WORD_LENGTH`] lowercase letters, so
/// a stray line in the pool cannot schedule an unplayable game.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_target_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|word| word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase()))
        .map(ToString::to_string)
        .collect();
    Ok(words)
}
