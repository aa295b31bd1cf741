//! TUI application state and logic

use crate::core::{Game, LetterAnswer, LetterStatus, Row, Trie, WORD_LENGTH};
use crate::output::formatters::share_grid;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// One submitted guess: its per-slot feedback and whether it spent a
/// full-word attempt
#[derive(Debug, Clone)]
pub struct GuessRecord {
    pub answer: Vec<LetterAnswer>,
    pub requested_full: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Application state
pub struct App<'a> {
    pub dict: &'a Trie,
    pub game: Game,
    pub date: NaiveDate,
    pub past_guesses: Vec<GuessRecord>,
    pub current_guess: String,
    pub requested_full: bool,
    pub remaining_full: u32,
    pub messages: Vec<Message>,
    pub outcome: Option<Outcome>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dict: &'a Trie, game: Game, date: NaiveDate) -> Self {
        let remaining_full = game.full_attempts;

        Self {
            dict,
            game,
            date,
            past_guesses: Vec::new(),
            current_guess: String::new(),
            requested_full: false,
            remaining_full,
            messages: vec![
                Message {
                    text: "Guess the day's word one row at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits. Tab trades a full-word attempt for an open row."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            outcome: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Shape row the next non-full guess will use
    ///
    /// Full-word guesses never advance the shape, they only delay it.
    #[must_use]
    pub fn guess_index(&self) -> usize {
        self.past_guesses
            .iter()
            .filter(|guess| !guess.requested_full)
            .count()
    }

    /// Layout of the row the player is typing into
    #[must_use]
    pub fn current_row(&self) -> Row {
        if self.requested_full || self.guess_index() >= self.game.shape.len() {
            Row::full(WORD_LENGTH)
        } else {
            self.game.shape.rows()[self.guess_index()].clone()
        }
    }

    pub fn push_letter(&mut self, letter: char) {
        if self.is_over() || !letter.is_ascii_alphabetic() {
            return;
        }
        if self.current_guess.len() >= self.current_row().active_count() {
            return;
        }
        self.current_guess.push(letter.to_ascii_lowercase());
    }

    pub fn pop_letter(&mut self) {
        if self.is_over() {
            return;
        }
        self.current_guess.pop();
    }

    /// Toggle the pending full-word attempt, spending or refunding one
    ///
    /// Clears the typed letters, they rarely fit the other layout. Rows that
    /// are already seven letters wide have nothing to trade for.
    pub fn toggle_full(&mut self) {
        if self.is_over() {
            return;
        }
        if self.requested_full {
            self.current_guess.clear();
            self.requested_full = false;
            self.remaining_full += 1;
        } else if self.remaining_full > 0 && self.current_row().active_count() < WORD_LENGTH {
            self.current_guess.clear();
            self.requested_full = true;
            self.remaining_full -= 1;
        }
    }

    /// Submit the typed guess against today's game
    pub fn submit_guess(&mut self) {
        if self.is_over() {
            return;
        }

        let guess = self.current_guess.clone();
        let spent_full = self.requested_full;
        let full_width = spent_full || self.guess_index() >= self.game.shape.len();

        let (row, words) = if full_width {
            if guess.len() != WORD_LENGTH {
                self.add_message(
                    &format!("{guess} isn't {WORD_LENGTH} letters long"),
                    MessageStyle::Error,
                );
                return;
            }
            (Row::full(WORD_LENGTH), vec![guess])
        } else {
            let row = self.game.shape.rows()[self.guess_index()].clone();
            let Some(words) = row.split_guess(&guess) else {
                self.add_message("Your guess wasn't the right shape", MessageStyle::Error);
                return;
            };
            (row, words)
        };

        let mut unknown_words = Vec::new();
        for word in &words {
            match self.dict.contains(word) {
                Ok(true) => {}
                Ok(false) => unknown_words.push(word.clone()),
                Err(_) => {
                    self.add_message("guesses can only use the letters a-z", MessageStyle::Error);
                    return;
                }
            }
        }
        match unknown_words.as_slice() {
            [] => {}
            [word] => {
                self.add_message(
                    &format!("{} isn't a word", word.to_uppercase()),
                    MessageStyle::Error,
                );
                return;
            }
            _ => {
                self.add_message("Neither of those are real words", MessageStyle::Error);
                return;
            }
        }

        let answer = self.game.score_guess(&row, &words);
        let won = self.game.is_winning_guess(&words);
        self.past_guesses.push(GuessRecord {
            answer,
            requested_full: spent_full,
        });
        self.current_guess.clear();
        self.requested_full = false;

        if won {
            self.outcome = Some(Outcome::Won);
            self.add_message("You've won! Congratulations!", MessageStyle::Success);
            return;
        }

        let limit = self.game.shape.len() + self.game.full_attempts as usize;
        if self.past_guesses.len() >= limit || self.remaining_full == 0 {
            self.outcome = Some(Outcome::Lost);
            self.add_message(
                &format!(
                    "You've lost, the word was {}",
                    self.game.target_word.to_uppercase()
                ),
                MessageStyle::Error,
            );
        }
    }

    /// Best-known status per letter, for the keyboard hints
    ///
    /// A letter marked correct anywhere stays green even when a later guess
    /// plays it somewhere worse.
    #[must_use]
    pub fn keyboard_hints(&self) -> FxHashMap<char, LetterStatus> {
        let mut hints = FxHashMap::default();
        for guess in &self.past_guesses {
            for answer in &guess.answer {
                let Some(letter) = answer.letter else {
                    continue;
                };
                if hint_rank(answer.status) == 0 {
                    continue;
                }
                let known = hints.entry(letter).or_insert(answer.status);
                if hint_rank(answer.status) > hint_rank(*known) {
                    *known = answer.status;
                }
            }
        }
        hints
    }

    /// Emoji grid of every scored row, for sharing
    #[must_use]
    pub fn share_text(&self) -> String {
        let rows: Vec<_> = self
            .past_guesses
            .iter()
            .map(|guess| guess.answer.clone())
            .collect();
        share_grid(&rows)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

const fn hint_rank(status: LetterStatus) -> u8 {
    match status {
        LetterStatus::Correct => 3,
        LetterStatus::WrongPosition => 2,
        LetterStatus::NotInWord => 1,
        LetterStatus::Unknown | LetterStatus::PositionNotUsed => 0,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') if app.is_over() => {
                    app.should_quit = true;
                }
                KeyCode::Tab => {
                    app.toggle_full();
                }
                KeyCode::Char(c) => {
                    app.push_letter(c);
                }
                KeyCode::Backspace => {
                    app.pop_letter();
                }
                KeyCode::Enter => {
                    app.submit_guess();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
