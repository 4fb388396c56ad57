//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PhaseTimer` - Cancellable one-shot timers driving the phase sequencer
//! - `ExerciseCatalog` - Source of breathing exercise definitions

mod exercise_catalog;
mod phase_timer;

pub use exercise_catalog::ExerciseCatalog;
pub use phase_timer::{PhaseTimer, TimerId};
