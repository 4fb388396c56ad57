//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `timer` - Phase timers (virtual clock, tokio sleeps)
//! - `catalog` - Exercise catalogs (built-in, YAML file)
//! - `http` - REST endpoints
//! - `websocket` - Live guided sessions

pub mod catalog;
pub mod http;
pub mod timer;
pub mod websocket;

pub use catalog::{InMemoryExerciseCatalog, YamlExerciseCatalog};
pub use timer::{ManualTimer, TokioPhaseTimer};
