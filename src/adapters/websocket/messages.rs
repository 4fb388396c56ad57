//! WebSocket message types for live breathing sessions.
//!
//! Defines the protocol between server and connected clients:
//! - Server → Client: connection confirmation, session snapshots, errors, pongs
//! - Client → Server: session controls and pings

use serde::{Deserialize, Serialize};

use crate::application::SessionCommand;
use crate::domain::breathing::SessionSnapshot;
use crate::domain::foundation::{DomainError, Timestamp};

// ============================================
// Server → Client Messages
// ============================================

/// All message types that can be sent from server to client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established and session created.
    Connected(ConnectedMessage),

    /// Session state changed.
    #[serde(rename = "session.update")]
    SessionUpdate(SessionUpdateMessage),

    /// A control was rejected or the message was not understood.
    Error(ErrorMessage),

    /// Heartbeat response.
    Pong(PongMessage),
}

/// Sent once, right after the upgrade.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedMessage {
    pub session_id: String,
    pub exercise: String,
    pub timestamp: String,
}

/// Full session snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdateMessage {
    #[serde(flatten)]
    pub snapshot: SessionSnapshot,
    pub timestamp: String,
}

/// Error message sent to client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
    pub timestamp: String,
}

/// Heartbeat response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PongMessage {
    pub timestamp: String,
}

impl ServerMessage {
    pub fn session_update(snapshot: SessionSnapshot) -> Self {
        ServerMessage::SessionUpdate(SessionUpdateMessage {
            snapshot,
            timestamp: Timestamp::now().to_rfc3339(),
        })
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        ServerMessage::Error(ErrorMessage {
            code: code.into(),
            message: message.into(),
            timestamp: Timestamp::now().to_rfc3339(),
        })
    }

    pub fn pong() -> Self {
        ServerMessage::Pong(PongMessage {
            timestamp: Timestamp::now().to_rfc3339(),
        })
    }
}

impl From<DomainError> for ServerMessage {
    fn from(err: DomainError) -> Self {
        ServerMessage::error(err.code.to_string(), err.message)
    }
}

// ============================================
// Client → Server Messages
// ============================================

/// All message types that can be received from client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Play,
    Pause,
    Toggle,
    Reset,
    /// Heartbeat request.
    Ping,
}

impl ClientMessage {
    /// The session control this message asks for, if any.
    pub fn command(&self) -> Option<SessionCommand> {
        match self {
            ClientMessage::Play => Some(SessionCommand::Play),
            ClientMessage::Pause => Some(SessionCommand::Pause),
            ClientMessage::Toggle => Some(SessionCommand::Toggle),
            ClientMessage::Reset => Some(SessionCommand::Reset),
            ClientMessage::Ping => None,
        }
    }
}
