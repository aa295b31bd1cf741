//! Check command - dictionary self-check
//!
//! Builds the trie from a dictionary file, then looks every word back up in
//! parallel. Exercises the same share-the-trie-read-only access pattern the
//! server uses, and doubles as a quick lookup benchmark.

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::wordlists::load_dictionary;

/// Result of a dictionary self-check
#[derive(Debug)]
pub struct CheckReport {
    pub word_count: usize,
    pub build_time: Duration,
    pub verify_time: Duration,
    pub lookups_per_second: f64,
    /// Words from the file the trie failed to find again; always empty
    /// unless the trie itself is broken
    pub missing: Vec<String>,
}

/// Load a dictionary and verify every word is found again
///
/// # Errors
///
/// Fails if the dictionary file cannot be read.
pub fn run_check(dictionary: &Path) -> anyhow::Result<CheckReport> {
    let build_start = Instant::now();
    let trie = load_dictionary(dictionary)
        .with_context(|| format!("reading dictionary from {}", dictionary.display()))?;
    let build_time = build_start.elapsed();

    // Same filtering the loader applies, so the lists agree
    let content = fs::read_to_string(dictionary)?;
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()))
        .collect();

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let verify_start = Instant::now();
    let missing: Vec<String> = words
        .par_iter()
        .filter_map(|&word| {
            let found = matches!(trie.contains(word), Ok(true));
            pb.inc(1);
            if found { None } else { Some(word.to_string()) }
        })
        .collect();
    let verify_time = verify_start.elapsed();
    pb.finish_and_clear();

    Ok(CheckReport {
        word_count: trie.len(),
        build_time,
        verify_time,
        lookups_per_second: words.len() as f64 / verify_time.as_secs_f64(),
        missing,
    })
}
