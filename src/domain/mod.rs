//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machines)
//! - `breathing` - Breathing exercises, the phase sequencer and session controller
//! - `focus` - Pomodoro and two-minute focus timers

pub mod breathing;
pub mod focus;
pub mod foundation;
