//! Date-keyed persistence for daily games
//!
//! One JSON document per calendar date under a data directory. The populate
//! command writes the schedule ahead of time; the server and local play read
//! the day's game back. Which day "today" is depends on the player's UTC
//! offset, so the date helpers live here too.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::core::Game;

/// Error loading or storing a game
#[derive(Debug)]
pub enum StoreError {
    /// No game has been scheduled for the date
    GameNotFound(NaiveDate),
    Io(io::Error),
    /// The stored document exists but does not parse as a game
    Corrupt(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameNotFound(date) => write!(f, "no game stored for {date}"),
            Self::Io(err) => write!(f, "game store i/o error: {err}"),
            Self::Corrupt(err) => write!(f, "stored game is not a valid game document: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GameNotFound(_) => None,
            Self::Io(err) => Some(err),
            Self::Corrupt(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(err)
    }
}

/// A directory of daily games, one `game-YYYY-MM-DD.json` per date
#[derive(Debug, Clone)]
pub struct GameStore {
    dir: PathBuf,
}

impl GameStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn open<P: Into<PathBuf>>(dir: P) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Store the game for a date, replacing any existing one
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the document cannot be written.
    pub fn put_game(&self, date: NaiveDate, game: &Game) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(game)?;
        fs::write(self.game_path(date), json)?;
        Ok(())
    }

    /// Load the game for a date
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GameNotFound`] if no game is scheduled for the
    /// date, [`StoreError::Corrupt`] if the document does not parse.
    pub fn game(&self, date: NaiveDate) -> Result<Game, StoreError> {
        let path = self.game_path(date);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::GameNotFound(date));
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn game_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("game-{}.json", date.format("%Y-%m-%d")))
    }
}

/// Calendar date at `instant` for a clock `tz_offset_secs` east of UTC
///
/// Offsets outside chrono's valid range (a full day either way) fall back to
/// the UTC date rather than failing the request.
#[must_use]
pub fn date_at(instant: DateTime<Utc>, tz_offset_secs: i32) -> NaiveDate {
    match FixedOffset::east_opt(tz_offset_secs) {
        Some(offset) => instant.with_timezone(&offset).date_naive(),
        None => instant.date_naive(),
    }
}

/// Today's date for a clock `tz_offset_secs` east of UTC
#[must_use]
pub fn local_date(tz_offset_secs: i32) -> NaiveDate {
    date_at(Utc::now(), tz_offset_secs)
}
