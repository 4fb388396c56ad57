//! WebSocket adapter for live guided breathing sessions.
//!
//! ```text
//!   client ──{"type":"play"}──▶ handler ──SessionCommand──▶ GuidedSession task
//!   client ◀──session.update─── handler ◀──watch snapshot── GuidedSession task
//! ```
//!
//! Each connection owns exactly one session; closing the socket ends it.
//!
//! # Components
//!
//! - [`messages`] - WebSocket message protocol types
//! - [`handler`] - Axum WebSocket upgrade handler

pub mod handler;
pub mod messages;

pub use handler::live_session;
pub use messages::{
    ClientMessage, ConnectedMessage, ErrorMessage, PongMessage, ServerMessage,
    SessionUpdateMessage,
};
