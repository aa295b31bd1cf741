//! Populate command - write the daily game schedule
//!
//! Shuffles the target pool with a fixed seed and stores one game per day,
//! starting yesterday. Because the seed and the start-date rule are fixed,
//! re-running against the same pool rebuilds the identical schedule.

use anyhow::{Context, bail};
use chrono::{Days, NaiveDate, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::path::Path;

use crate::core::{DEFAULT_FULL_ATTEMPTS, Game, standard_shape};
use crate::store::GameStore;
use crate::wordlists::load_target_words;

/// Fixed shuffle seed so the schedule survives re-population
const SCHEDULE_SEED: u64 = 0;

/// What a populate run wrote
#[derive(Debug)]
pub struct PopulateReport {
    pub scheduled: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

/// Schedule one game per day from the target pool
///
/// The first game lands on yesterday's UTC date, covering clients whose
/// local date trails UTC. Every game uses the standard shape and full-attempt
/// allowance.
///
/// # Errors
///
/// Fails if the store directory cannot be opened, the pool cannot be read or
/// holds no usable words, or a game cannot be written.
pub fn run_populate(data_dir: &Path, target_words: &Path) -> anyhow::Result<PopulateReport> {
    let store = GameStore::open(data_dir)
        .with_context(|| format!("opening game store at {}", data_dir.display()))?;
    let mut pool = load_target_words(target_words)
        .with_context(|| format!("reading target words from {}", target_words.display()))?;
    if pool.is_empty() {
        bail!("no usable target words in {}", target_words.display());
    }

    let mut rng = StdRng::seed_from_u64(SCHEDULE_SEED);
    pool.shuffle(&mut rng);

    let first_date = Utc::now()
        .date_naive()
        .pred_opt()
        .context("start date out of range")?;

    let pb = ProgressBar::new(pool.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let scheduled = pool.len();
    let mut date = first_date;
    let mut last_date = first_date;
    for word in pool {
        store.put_game(date, &Game::new(word, standard_shape(), DEFAULT_FULL_ATTEMPTS))?;
        pb.inc(1);
        last_date = date;
        date = date
            .checked_add_days(Days::new(1))
            .context("schedule ran past the last representable date")?;
    }
    pb.finish_and_clear();

    Ok(PopulateReport {
        scheduled,
        first_date,
        last_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    struct TempDirs {
        data_dir: PathBuf,
        pool_path: PathBuf,
    }

    impl TempDirs {
        fn new(name: &str, pool: &str) -> Self {
            let base = std::env::temp_dir().join(format!(
                "shardle-populate-{}-{name}",
                std::process::id()
            ));
            let data_dir = base.join("data");
            let pool_path = base.join("targets.txt");
            fs::create_dir_all(&base).unwrap();
            fs::write(&pool_path, pool).unwrap();
            Self {
                data_dir,
                pool_path,
            }
        }
    }

    impl Drop for TempDirs {
        fn drop(&mut self) {
            if let Some(base) = self.data_dir.parent() {
                fs::remove_dir_all(base).ok();
            }
        }
    }

    #[test]
    fn populate_schedules_consecutive_days() {
        let dirs = TempDirs::new("consecutive", "telling\nrobotic\ncabbage\n");

        let report = run_populate(&dirs.data_dir, &dirs.pool_path).unwrap();
        assert_eq!(report.scheduled, 3);
        assert_eq!(report.first_date, Utc::now().date_naive().pred_opt().unwrap());
        assert_eq!(
            report.last_date,
            report.first_date.checked_add_days(Days::new(2)).unwrap()
        );

        let store = GameStore::open(&dirs.data_dir).unwrap();
        let mut seen = Vec::new();
        let mut date = report.first_date;
        for _ in 0..3 {
            let game = store.game(date).unwrap();
            assert_eq!(game.shape, standard_shape());
            assert_eq!(game.full_attempts, DEFAULT_FULL_ATTEMPTS);
            seen.push(game.target_word);
            date = date.checked_add_days(Days::new(1)).unwrap();
        }

        seen.sort();
        assert_eq!(seen, vec!["cabbage", "robotic", "telling"]);
    }

    #[test]
    fn populate_is_deterministic() {
        let pool = "telling\nrobotic\ncabbage\nparrots\nmallard\n";
        let first = TempDirs::new("determinism-a", pool);
        let second = TempDirs::new("determinism-b", pool);

        let report = run_populate(&first.data_dir, &first.pool_path).unwrap();
        run_populate(&second.data_dir, &second.pool_path).unwrap();

        let store_a = GameStore::open(&first.data_dir).unwrap();
        let store_b = GameStore::open(&second.data_dir).unwrap();
        let mut date = report.first_date;
        for _ in 0..5 {
            assert_eq!(
                store_a.game(date).unwrap().target_word,
                store_b.game(date).unwrap().target_word
            );
            date = date.checked_add_days(Days::new(1)).unwrap();
        }
    }

    #[test]
    fn populate_skips_unusable_pool_entries() {
        let dirs = TempDirs::new("filtered", "telling\nshort\nUPPER\nrobotic\n");

        let report = run_populate(&dirs.data_dir, &dirs.pool_path).unwrap();
        assert_eq!(report.scheduled, 2);
    }

    #[test]
    fn populate_with_empty_pool_fails() {
        let dirs = TempDirs::new("empty", "short\nwords\nonly\n");

        assert!(run_populate(&dirs.data_dir, &dirs.pool_path).is_err());
    }
}
