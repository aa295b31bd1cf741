//! TUI rendering with ratatui
//!
//! Board, keyboard hints, and message panels for daily play.

use super::app::{App, MessageStyle, Outcome};
use crate::core::{LetterAnswer, LetterStatus, Row, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🧩 SHARDLE - {}", app.date.format("%Y-%m-%d")))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let total_rows = app.game.shape.len() + app.game.full_attempts as usize;
    let mut lines = Vec::with_capacity(total_rows);

    for i in 0..total_rows {
        if let Some(guess) = app.past_guesses.get(i) {
            lines.push(answer_line(&guess.answer));
        } else if i == app.past_guesses.len() && !app.is_over() {
            lines.push(input_line(&app.current_row(), &app.current_guess));
        } else {
            lines.push(blank_line());
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

/// A scored row: every slot colored by its feedback
fn answer_line(answer: &[LetterAnswer]) -> Line<'static> {
    let mut spans = Vec::new();
    for cell in answer {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        let text = match cell.letter {
            Some(letter) => format!(" {} ", letter.to_ascii_uppercase()),
            None => " · ".to_string(),
        };
        spans.push(Span::styled(text, status_style(cell.status)));
    }
    Line::from(spans)
}

/// The row being typed: letters fill the active slots left to right
fn input_line(row: &Row, typed: &str) -> Line<'static> {
    let mut letters = typed.chars();
    let mut spans = Vec::new();
    for &active in row.slots() {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        let span = if active {
            match letters.next() {
                Some(letter) => Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    Style::default()
                        .bg(Color::Gray)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(" _ ", Style::default().fg(Color::Gray)),
            }
        } else {
            Span::styled(" · ", Style::default().fg(Color::DarkGray))
        };
        spans.push(span);
    }
    Line::from(spans)
}

fn blank_line() -> Line<'static> {
    let mut spans = Vec::new();
    for _ in 0..WORD_LENGTH {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(" ░ ", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default().bg(Color::Green).fg(Color::Black),
        LetterStatus::WrongPosition => Style::default().bg(Color::Yellow).fg(Color::Black),
        LetterStatus::NotInWord => Style::default().bg(Color::DarkGray).fg(Color::White),
        LetterStatus::PositionNotUsed => Style::default().fg(Color::DarkGray),
        LetterStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let share_height = if app.is_over() {
        app.past_guesses.len() as u16 + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),            // Keyboard hints
            Constraint::Min(4),               // Messages
            Constraint::Length(share_height), // Share grid, once the game ends
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    if app.is_over() {
        render_share(f, app, chunks[2]);
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.keyboard_hints();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for letter in row.chars() {
                if !spans.is_empty() {
                    spans.push(Span::raw(" "));
                }
                let style = match hints.get(&letter) {
                    Some(&status) => status_style(status),
                    None => Style::default().fg(Color::White),
                };
                spans.push(Span::styled(letter.to_ascii_uppercase().to_string(), style));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let share = Paragraph::new(app.share_text())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(share, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.outcome {
        Some(Outcome::Won) => (
            " 🎉 You've won! Congratulations! | 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        Some(Outcome::Lost) => (
            format!(
                " You've lost, the word was {} | 'q' to quit ",
                app.game.target_word.to_uppercase()
            ),
            String::new(),
            Color::Red,
        ),
        None => {
            let title = if app.requested_full {
                " Full-Word Attempt | TAB to cancel ".to_string()
            } else {
                " Your Guess | TAB for a full-word attempt ".to_string()
            };
            (title, app.current_guess.to_uppercase(), Color::Yellow)
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let limit = app.game.shape.len() + app.game.full_attempts as usize;
    let guesses = Paragraph::new(format!("Guesses: {}/{}", app.past_guesses.len(), limit))
        .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let attempts = Paragraph::new(format!("Full attempts left: {}", app.remaining_full))
        .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[1]);

    let help_text = if app.is_over() {
        "q: Quit"
    } else {
        "Enter: Submit | TAB: Full word | ESC: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
