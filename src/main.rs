//! Shardle - CLI
//!
//! A daily word game where the board splits guesses into pieces. Serves the
//! game over TCP, schedules daily targets, and plays locally in a TUI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shardle::{
    commands::{run_check, run_populate},
    output::{print_check_report, print_populate_report},
    server::{ServerConfig, ServerState, run_server},
    store::GameStore,
    wordlists::load_dictionary,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "shardle",
    about = "Daily split-word guessing game: server, scheduler, and local play",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the daily game over TCP
    Serve {
        /// File of valid dictionary words, one per line
        #[arg(short, long, default_value = "wordlists/dict.txt")]
        dictionary: PathBuf,

        /// Directory holding the scheduled game files
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },

    /// Schedule one game per day from a list of target words
    Populate {
        /// Directory to write the game files into
        data_dir: PathBuf,

        /// File of candidate target words, one per line
        target_words: PathBuf,
    },

    /// Play today's game in the terminal
    Play {
        /// File of valid dictionary words, one per line
        #[arg(short, long, default_value = "wordlists/dict.txt")]
        dictionary: PathBuf,

        /// Directory holding the scheduled game files
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Verify a dictionary file loads and every word in it is found
    Check {
        /// File of dictionary words to verify
        dictionary: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            dictionary,
            data_dir,
            host,
            port,
        } => run_serve_command(&dictionary, &data_dir, host, port),
        Commands::Populate {
            data_dir,
            target_words,
        } => run_populate_command(&data_dir, &target_words),
        Commands::Play {
            dictionary,
            data_dir,
        } => run_play_command(&dictionary, &data_dir),
        Commands::Check { dictionary } => run_check_command(&dictionary),
    }
}

fn run_serve_command(dictionary: &Path, data_dir: &Path, host: String, port: u16) -> Result<()> {
    let dict = load_dictionary(dictionary)
        .with_context(|| format!("failed to load dictionary from {}", dictionary.display()))?;
    println!("[server] loaded {} dictionary words", dict.len());

    let store = GameStore::open(data_dir)
        .with_context(|| format!("failed to open game store at {}", data_dir.display()))?;

    let state = Arc::new(ServerState { dict, store });
    let config = ServerConfig { host, port };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_server(config, state, None))
}

fn run_populate_command(data_dir: &Path, target_words: &Path) -> Result<()> {
    let report = run_populate(data_dir, target_words)?;
    print_populate_report(&report);
    Ok(())
}

fn run_play_command(dictionary: &Path, data_dir: &Path) -> Result<()> {
    use shardle::interactive::{App, run_tui};

    let dict = load_dictionary(dictionary)
        .with_context(|| format!("failed to load dictionary from {}", dictionary.display()))?;
    let store = GameStore::open(data_dir)
        .with_context(|| format!("failed to open game store at {}", data_dir.display()))?;

    let date = chrono::Local::now().date_naive();
    let game = store
        .game(date)
        .with_context(|| format!("no game is scheduled for {date}, run populate first"))?;

    let app = App::new(&dict, game, date);
    run_tui(app)
}

fn run_check_command(dictionary: &Path) -> Result<()> {
    let report = run_check(dictionary)?;
    print_check_report(&report);
    Ok(())
}
