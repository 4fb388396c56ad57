//! Breathing exercises: phases, cycles, the phase sequencer and the session
//! controller built on top of it.
//!
//! # Module Organization
//!
//! - `phase` - Phase states and durations
//! - `cycle` - Validated ring of phases
//! - `exercise` - Catalog entries (slug, keys, session length)
//! - `catalog` - Exercises shipped with the application
//! - `sequencer` - Timer-driven phase state machine
//! - `session` - Play/pause/reset and cycle counting

mod catalog;
mod cycle;
mod errors;
mod exercise;
mod phase;
mod sequencer;
mod session;

pub use catalog::BUILTIN_EXERCISES;
pub use cycle::Cycle;
pub use errors::{CycleError, SequencerError, SessionError};
pub use exercise::{Exercise, ExerciseSlug, InstructionStep, MAX_SLUG_LENGTH};
pub use phase::{Phase, PhaseState};
pub use sequencer::{CycleCompleteHook, PhaseAdvance, PhaseSequencer, SequencerState};
pub use session::{BreathingSession, PhaseView, SessionSnapshot, SessionStatus};
