//! Phase timer adapters.
//!
//! - `ManualTimer` - Virtual clock advanced by hand (tests)
//! - `TokioPhaseTimer` - Tokio sleeps reporting on a channel (server)

mod manual;
mod tokio_timer;

pub use manual::ManualTimer;
pub use tokio_timer::TokioPhaseTimer;
