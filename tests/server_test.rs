use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedReadHalf;
use tokio::sync::oneshot;

use shardle::core::{DEFAULT_FULL_ATTEMPTS, Game, Trie, standard_shape};
use shardle::server::{ServerConfig, ServerState, run_server};
use shardle::store::GameStore;

struct TempDir(PathBuf);

impl TempDir {
    fn new(name: &str) -> Self {
        Self(std::env::temp_dir().join(format!("shardle-server-{}-{}", name, std::process::id())))
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Store the same game on yesterday, today, and tomorrow so a test can't
/// race a midnight rollover.
fn seeded_state(data_dir: &Path) -> Arc<ServerState> {
    let mut dict = Trie::new();
    for word in ["telling", "tellers", "tell", "in"] {
        dict.insert(word).unwrap();
    }

    let store = GameStore::open(data_dir).unwrap();
    let game = Game::new("telling", standard_shape(), DEFAULT_FULL_ATTEMPTS);
    let today = Utc::now().date_naive();
    for date in [today.pred_opt().unwrap(), today, today.succ_opt().unwrap()] {
        store.put_game(date, &game).unwrap();
    }

    Arc::new(ServerState { dict, store })
}

async fn start_server(
    state: Arc<ServerState>,
) -> (std::net::SocketAddr, tokio::task::JoinHandle<()>) {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let (ready_tx, ready_rx) = oneshot::channel();

    let handle = tokio::spawn(async move {
        let _ = run_server(config, state, Some(ready_tx)).await;
    });

    let addr = tokio::time::timeout(Duration::from_secs(2), ready_rx)
        .await
        .expect("server did not signal ready")
        .expect("ready channel dropped");

    (addr, handle)
}

async fn send_line(write_half: &mut (impl AsyncWriteExt + Unpin), line: &str) {
    write_half.write_all(line.as_bytes()).await.unwrap();
    write_half.write_all(b"\n").await.unwrap();
    write_half.flush().await.unwrap();
}

async fn read_json(lines: &mut tokio::io::Lines<BufReader<OwnedReadHalf>>) -> serde_json::Value {
    let line = tokio::time::timeout(Duration::from_secs(2), lines.next_line())
        .await
        .expect("timed out waiting for a response")
        .unwrap()
        .expect("expected a response line");
    serde_json::from_str(&line).unwrap()
}

#[tokio::test]
async fn serves_the_daily_game_and_scores_guesses() {
    let dir = TempDir::new("e2e");
    let state = seeded_state(dir.path());
    let (addr, server_handle) = start_server(state).await;

    let stream = TcpStream::connect(addr).await.expect("connect failed");
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    // game
    send_line(&mut write_half, r#"{"type":"game","tz_offset_secs":0}"#).await;
    let game_v = read_json(&mut lines).await;
    assert_eq!(game_v["type"], "game");
    assert_eq!(game_v["game"]["full_attempts"], 2);
    assert_eq!(game_v["game"]["shape"].as_array().unwrap().len(), 6);
    // The target never leaves the server.
    assert!(!game_v.to_string().contains("telling"));

    // split guess on the second row: tell + in
    send_line(
        &mut write_half,
        r#"{"type":"guess","guess":"tellin","guess_index":1,"use_full":false,"tz_offset_secs":0}"#,
    )
    .await;
    let guess_v = read_json(&mut lines).await;
    assert_eq!(guess_v["type"], "guess");
    assert_eq!(guess_v["won"], false);
    assert_eq!(guess_v["words"][0], "tell");
    assert_eq!(guess_v["words"][1], "in");
    let statuses: Vec<i64> = guess_v["answer"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["status"].as_i64().unwrap())
        .collect();
    assert_eq!(statuses, vec![3, 3, 3, 3, 4, 2, 2]);
    assert_eq!(guess_v["answer"][4]["letter"], serde_json::Value::Null);

    // full-width winning guess
    send_line(
        &mut write_half,
        r#"{"type":"guess","guess":"telling","guess_index":1,"use_full":true,"tz_offset_secs":0}"#,
    )
    .await;
    let win_v = read_json(&mut lines).await;
    assert_eq!(win_v["type"], "guess");
    assert_eq!(win_v["won"], true);
    assert!(
        win_v["answer"]
            .as_array()
            .unwrap()
            .iter()
            .all(|a| a["status"] == 3)
    );

    server_handle.abort();
}

#[tokio::test]
async fn malformed_requests_get_errors_and_the_connection_survives() {
    let dir = TempDir::new("malformed");
    let state = seeded_state(dir.path());
    let (addr, server_handle) = start_server(state).await;

    let stream = TcpStream::connect(addr).await.unwrap();
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    send_line(&mut write_half, "not json at all").await;
    let v = read_json(&mut lines).await;
    assert_eq!(v["type"], "error");
    assert!(
        v["message"]
            .as_str()
            .unwrap()
            .contains("could not parse request")
    );

    send_line(
        &mut write_half,
        r#"{"type":"guess","guess":"x","guess_index":1,"use_full":false}"#,
    )
    .await;
    let v = read_json(&mut lines).await;
    assert_eq!(v["type"], "error");
    assert_eq!(v["message"], "Your guess wasn't the right shape");

    // Still serving after both errors.
    send_line(&mut write_half, r#"{"type":"game"}"#).await;
    let v = read_json(&mut lines).await;
    assert_eq!(v["type"], "game");

    server_handle.abort();
}

#[tokio::test]
async fn missing_schedule_reports_an_error() {
    let dir = TempDir::new("empty");
    let mut dict = Trie::new();
    dict.insert("telling").unwrap();
    let store = GameStore::open(dir.path()).unwrap();
    let state = Arc::new(ServerState { dict, store });
    let (addr, server_handle) = start_server(state).await;

    let stream = TcpStream::connect(addr).await.unwrap();
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    send_line(&mut write_half, r#"{"type":"game","tz_offset_secs":0}"#).await;
    let v = read_json(&mut lines).await;
    assert_eq!(v["type"], "error");
    assert!(
        v["message"]
            .as_str()
            .unwrap()
            .contains("no game is scheduled for")
    );

    server_handle.abort();
}

#[tokio::test]
async fn two_clients_are_served_concurrently() {
    let dir = TempDir::new("concurrent");
    let state = seeded_state(dir.path());
    let (addr, server_handle) = start_server(state).await;

    let first = TcpStream::connect(addr).await.unwrap();
    let second = TcpStream::connect(addr).await.unwrap();
    let (read1, mut write1) = first.into_split();
    let (read2, mut write2) = second.into_split();
    let mut lines1 = BufReader::new(read1).lines();
    let mut lines2 = BufReader::new(read2).lines();

    // The second client asks first; both still get served.
    send_line(&mut write2, r#"{"type":"game"}"#).await;
    send_line(&mut write1, r#"{"type":"game"}"#).await;

    assert_eq!(read_json(&mut lines1).await["type"], "game");
    assert_eq!(read_json(&mut lines2).await["type"], "game");

    server_handle.abort();
}
