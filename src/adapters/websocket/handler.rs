//! WebSocket upgrade handler for live breathing sessions.
//!
//! Handles the HTTP → WebSocket upgrade and the connection lifecycle:
//! 1. Resolve the exercise slug (400 malformed, 404 unknown)
//! 2. Upgrade and spawn a guided session for this connection
//! 3. Forward controls in, snapshots out
//! 4. Shut the session down on disconnect

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};

use crate::adapters::http::breathing::handlers::LiveSessionGuard;
use crate::adapters::http::breathing::BreathingAppState;
use crate::adapters::http::error::ApiError;
use crate::application::handlers::breathing::GetExerciseQuery;
use crate::application::GuidedSession;
use crate::domain::breathing::{Exercise, ExerciseSlug};
use crate::domain::foundation::Timestamp;

use super::messages::{ClientMessage, ConnectedMessage, ServerMessage};

/// Handle WebSocket upgrade requests for a guided session.
///
/// Route: `GET /api/breathing/exercises/:slug/live`
pub async fn live_session(
    ws: WebSocketUpgrade,
    Path(slug): Path<String>,
    State(state): State<BreathingAppState>,
) -> Result<Response, ApiError> {
    let query = GetExerciseQuery {
        slug: ExerciseSlug::new(slug)?,
    };
    let exercise = state.get_exercise_handler().handle(query).await?;

    let live = state.track_live_session();
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, exercise, live)))
}

/// Runs one connection: one guided session, torn down when the socket
/// closes. `live` is released only after the session task has finished.
async fn handle_socket(socket: WebSocket, exercise: Exercise, live: LiveSessionGuard) {
    let (mut sender, mut receiver) = socket.split();
    let session = GuidedSession::spawn(exercise);
    let session_id = session.id();
    let mut updates = session.subscribe();

    let connected = ServerMessage::Connected(ConnectedMessage {
        session_id: session.id().to_string(),
        exercise: session.snapshot().exercise.to_string(),
        timestamp: Timestamp::now().to_rfc3339(),
    });
    let initial = ServerMessage::session_update(updates.borrow_and_update().clone());
    if send_message(&mut sender, &connected).await.is_err()
        || send_message(&mut sender, &initial).await.is_err()
    {
        tracing::debug!(session = %session.id(), "client disconnected before first update");
        session.shutdown().await;
        drop(live);
        return;
    }

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                if let Err(e) = send_message(&mut sender, &ServerMessage::session_update(snapshot)).await {
                    tracing::debug!(session = %session.id(), "Send error, closing connection: {}", e);
                    break;
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(reply) = handle_client_text(&session, &text).await {
                            if send_message(&mut sender, &reply).await.is_err() {
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Binary(_))) => {
                        tracing::warn!(session = %session.id(), "Received unsupported binary message");
                    }
                    // Protocol ping/pong is answered by axum
                    Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) => {}
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::debug!(session = %session.id(), "Client closed connection");
                        break;
                    }
                    Some(Err(e)) => {
                        tracing::debug!(session = %session.id(), "Receive error: {}", e);
                        break;
                    }
                }
            }
        }
    }

    session.shutdown().await;
    tracing::debug!(session = %session_id, "live session closed");
    drop(live);
}

/// Applies one text frame from the client.
///
/// Returns a direct reply for pings and failures. Successful controls reply
/// through the snapshot stream instead.
pub(crate) async fn handle_client_text(session: &GuidedSession, text: &str) -> Option<ServerMessage> {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(session = %session.id(), error = %e, "unparseable client message");
            return Some(ServerMessage::error("INVALID_MESSAGE", e.to_string()));
        }
    };

    match message.command() {
        None => Some(ServerMessage::pong()),
        Some(command) => match session.execute(command).await {
            Ok(()) => None,
            Err(e) => Some(ServerMessage::from(e)),
        },
    }
}

/// Send a JSON message over the WebSocket.
async fn send_message(
    sender: &mut SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    sender.send(Message::Text(json)).await
}
