//! TCP service for the daily game
//!
//! Speaks the line-delimited JSON protocol from [`protocol`]: each
//! connection sends one request per line and gets one response per line.
//! Connections are handled in their own tasks; they share the dictionary
//! trie and the game store behind an `Arc`, both read-only once the server
//! is up.

pub mod protocol;

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use crate::core::{Game, Row, Trie, WORD_LENGTH};
use crate::store::{self, GameStore, StoreError};
use self::protocol::{PublicGame, Request, Response};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// State shared by every connection
#[derive(Debug)]
pub struct ServerState {
    pub dict: Trie,
    pub store: GameStore,
}

/// Run the TCP server until it fails
///
/// Binds `config.host:config.port` (port 0 picks a free one) and reports the
/// bound address through `ready_tx` before accepting connections, so tests
/// and supervisors can wait for a live socket.
///
/// # Errors
///
/// Returns an error if binding or accepting fails; per-connection errors are
/// logged and do not bring the server down.
pub async fn run_server(
    config: ServerConfig,
    state: Arc<ServerState>,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let bound = listener.local_addr()?;
    println!("[server] listening on {bound}");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let mut client_counter = 0usize;
    loop {
        let (socket, addr) = listener.accept().await?;
        client_counter += 1;
        let client_id = client_counter;
        println!("[server] client {client_id} connected from {addr}");

        let state = Arc::clone(&state);
        tokio::spawn(async move {
            if let Err(err) = handle_client(socket, state).await {
                eprintln!("[server] client {client_id} error: {err}");
            }
            println!("[server] client {client_id} disconnected");
        });
    }
}

/// Serve one connection: read request lines, write response lines
async fn handle_client(socket: TcpStream, state: Arc<ServerState>) -> anyhow::Result<()> {
    let (reader, mut writer) = tokio::io::split(socket);
    let mut reader = BufReader::new(reader);

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(trimmed) {
            Ok(request) => {
                // Store reads are plain file I/O, so keep them off the runtime
                let state = Arc::clone(&state);
                tokio::task::spawn_blocking(move || handle_request(&state, Utc::now(), &request))
                    .await?
            }
            Err(err) => Response::error(format!("could not parse request: {err}")),
        };

        let mut buf = serde_json::to_vec(&response)?;
        buf.push(b'\n');
        writer.write_all(&buf).await?;
        writer.flush().await?;
    }
    Ok(())
}

/// Answer a single request against the store contents at `now`
///
/// Synchronous and deterministic given the clock, which keeps the whole
/// guess pipeline unit-testable without a socket.
#[must_use]
pub fn handle_request(state: &ServerState, now: DateTime<Utc>, request: &Request) -> Response {
    match request {
        Request::Game { tz_offset_secs } => {
            let date = store::date_at(now, *tz_offset_secs);
            match state.store.game(date) {
                Ok(game) => Response::Game {
                    date: date.to_string(),
                    game: PublicGame::from(&game),
                },
                Err(err) => game_load_error(date, &err),
            }
        }
        Request::Guess {
            guess,
            guess_index,
            use_full,
            tz_offset_secs,
        } => {
            let date = store::date_at(now, *tz_offset_secs);
            match state.store.game(date) {
                Ok(game) => score_guess(state, &game, guess, *guess_index, *use_full),
                Err(err) => game_load_error(date, &err),
            }
        }
    }
}

fn game_load_error(date: NaiveDate, err: &StoreError) -> Response {
    match err {
        StoreError::GameNotFound(_) => {
            Response::error(format!("no game is scheduled for {date}"))
        }
        other => {
            eprintln!("[server] failed to load game for {date}: {other}");
            Response::error("failed to load today's game")
        }
    }
}

/// The guess pipeline: resolve the row, split, validate, score
fn score_guess(
    state: &ServerState,
    game: &Game,
    guess: &str,
    guess_index: usize,
    use_full: bool,
) -> Response {
    let guess = guess.to_lowercase();

    // Once the shape is exhausted every guess is a whole-board word, and a
    // spent full attempt plays the same way: the guess is never split
    let (row, words) = if use_full || guess_index >= game.shape.len() {
        (Row::full(WORD_LENGTH), vec![guess.clone()])
    } else {
        let row = game.shape.rows()[guess_index].clone();
        match row.split_guess(&guess) {
            Some(words) => (row, words),
            None => return Response::error("Your guess wasn't the right shape"),
        }
    };

    let lengths = row.segment_lengths();
    let mut unknown_words: Vec<&str> = Vec::new();
    for (word, expected) in words.iter().zip(&lengths) {
        if word.chars().count() != *expected {
            return Response::error(format!("{word} isn't {expected} letters long"));
        }
        match state.dict.contains(word) {
            Ok(true) => {}
            Ok(false) => unknown_words.push(word),
            Err(_) => return Response::error("guesses can only use the letters a-z"),
        }
    }

    match unknown_words.as_slice() {
        [] => {}
        [word] => return Response::error(format!("{} isn't a word", word.to_uppercase())),
        _ => return Response::error("Neither of those are real words"),
    }

    let won = game.is_winning_guess(&words);
    let answer = game.score_guess(&row, &words);
    Response::Guess { answer, words, won }
}
