//! WarmNest - Mental-wellness companion backend
//!
//! Guided breathing sessions driven by a phase sequencer, plus Pomodoro and
//! two-minute focus timers. Laid out as ports and adapters:
//!
//! - `domain` - breathing cycles, sessions and focus timers (no I/O)
//! - `ports` - timer and catalog seams
//! - `adapters` - tokio timers, exercise catalogs, HTTP and WebSocket
//! - `application` - query handlers and the guided session runtime
//! - `config` - environment-driven settings

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
