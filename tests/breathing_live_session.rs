//! Integration tests for the live breathing session socket.
//!
//! These tests serve the full router on an ephemeral port and talk to it
//! with a real WebSocket client:
//! 1. The handshake frames (`connected`, then a ready snapshot)
//! 2. Controls sent as text frames change the published snapshot
//! 3. Closing the socket tears the guided session down
//! 4. Unknown exercises are refused before the upgrade

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use warmnest::adapters::http::{api_router, BreathingAppState, FocusAppState, HealthState};
use warmnest::adapters::InMemoryExerciseCatalog;
use warmnest::config::ServerConfig;
use warmnest::ports::ExerciseCatalog;

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

const FRAME_TIMEOUT: Duration = Duration::from_secs(2);

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Serves the application on 127.0.0.1:0 and returns its address along with
/// the breathing state, so tests can watch live-session bookkeeping.
async fn serve() -> (SocketAddr, BreathingAppState) {
    let catalog: Arc<dyn ExerciseCatalog> = Arc::new(InMemoryExerciseCatalog::builtin());
    let breathing = BreathingAppState::new(catalog.clone());
    let app = api_router(
        &ServerConfig::default(),
        HealthState::new(catalog),
        breathing.clone(),
        FocusAppState::default(),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, breathing)
}

async fn connect(addr: SocketAddr, slug: &str) -> Client {
    let url = format!("ws://{}/api/breathing/exercises/{}/live", addr, slug);
    let (client, _) = connect_async(url).await.unwrap();
    client
}

/// Next JSON text frame from the server.
async fn next_json(client: &mut Client) -> Value {
    loop {
        let frame = tokio::time::timeout(FRAME_TIMEOUT, client.next())
            .await
            .expect("no frame from server in time")
            .expect("socket closed")
            .unwrap();
        if let Message::Text(text) = frame {
            return serde_json::from_str(&text).unwrap();
        }
    }
}

async fn send(client: &mut Client, json: &str) {
    client.send(Message::Text(json.to_string())).await.unwrap();
}

async fn wait_for_live_sessions(state: &BreathingAppState, expected: usize) {
    let deadline = tokio::time::Instant::now() + FRAME_TIMEOUT;
    while state.live_sessions() != expected {
        assert!(
            tokio::time::Instant::now() < deadline,
            "live sessions stuck at {}, expected {}",
            state.live_sessions(),
            expected
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

// =============================================================================
// Handshake
// =============================================================================

#[tokio::test]
async fn connection_opens_with_connected_then_ready_snapshot() {
    let (addr, _) = serve().await;
    let mut client = connect(addr, "box-breathing").await;

    let connected = next_json(&mut client).await;
    assert_eq!(connected["type"], "connected");
    assert_eq!(connected["exercise"], "box-breathing");
    assert!(connected["sessionId"].is_string());

    let update = next_json(&mut client).await;
    assert_eq!(update["type"], "session.update");
    assert_eq!(update["status"], "ready");
    assert_eq!(update["isRunning"], false);
    assert_eq!(update["totalCycles"], 18);
    assert!(update["currentPhase"].is_null());
}

// =============================================================================
// Controls
// =============================================================================

#[tokio::test]
async fn play_publishes_running_snapshot_at_first_phase() {
    let (addr, _) = serve().await;
    let mut client = connect(addr, "box-breathing").await;
    next_json(&mut client).await;
    next_json(&mut client).await;

    send(&mut client, r#"{"type":"play"}"#).await;
    let update = next_json(&mut client).await;

    assert_eq!(update["type"], "session.update");
    assert_eq!(update["status"], "running");
    assert_eq!(update["currentPhase"]["index"], 0);
    assert_eq!(update["currentPhase"]["state"], "inhale");
}

#[tokio::test]
async fn pause_after_play_publishes_paused_snapshot() {
    let (addr, _) = serve().await;
    let mut client = connect(addr, "4-7-8-breathing").await;
    next_json(&mut client).await;
    next_json(&mut client).await;

    send(&mut client, r#"{"type":"toggle"}"#).await;
    assert_eq!(next_json(&mut client).await["status"], "running");
    send(&mut client, r#"{"type":"toggle"}"#).await;
    let update = next_json(&mut client).await;

    assert_eq!(update["status"], "paused");
    assert_eq!(update["completedCycles"], 0);
}

#[tokio::test]
async fn ping_and_garbage_get_direct_replies() {
    let (addr, _) = serve().await;
    let mut client = connect(addr, "box-breathing").await;
    next_json(&mut client).await;
    next_json(&mut client).await;

    send(&mut client, r#"{"type":"ping"}"#).await;
    assert_eq!(next_json(&mut client).await["type"], "pong");

    send(&mut client, r#"{"type":"skip"}"#).await;
    let error = next_json(&mut client).await;
    assert_eq!(error["type"], "error");
    assert_eq!(error["code"], "INVALID_MESSAGE");
}

// =============================================================================
// Teardown
// =============================================================================

#[tokio::test]
async fn closing_the_socket_shuts_the_session_down() {
    let (addr, state) = serve().await;
    let mut client = connect(addr, "box-breathing").await;
    next_json(&mut client).await;
    next_json(&mut client).await;
    send(&mut client, r#"{"type":"play"}"#).await;
    next_json(&mut client).await;
    assert_eq!(state.live_sessions(), 1);

    client.close(None).await.unwrap();

    wait_for_live_sessions(&state, 0).await;
}

#[tokio::test]
async fn each_connection_gets_its_own_session() {
    let (addr, state) = serve().await;
    let mut first = connect(addr, "box-breathing").await;
    let mut second = connect(addr, "box-breathing").await;

    let first_id = next_json(&mut first).await["sessionId"].clone();
    let second_id = next_json(&mut second).await["sessionId"].clone();
    assert_ne!(first_id, second_id);
    wait_for_live_sessions(&state, 2).await;

    drop(first);
    drop(second);
    wait_for_live_sessions(&state, 0).await;
}

// =============================================================================
// Refused upgrades
// =============================================================================

#[tokio::test]
async fn unknown_exercise_is_refused_before_upgrade() {
    let (addr, state) = serve().await;
    let url = format!("ws://{}/api/breathing/exercises/lion-breath/live", addr);

    match connect_async(url).await {
        Err(tungstenite::Error::Http(response)) => assert_eq!(response.status(), 404),
        other => panic!("expected HTTP 404 refusal, got {:?}", other.map(|_| ())),
    }
    assert_eq!(state.live_sessions(), 0);
}
