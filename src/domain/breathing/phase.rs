//! Breathing phases: one named step of a pattern with a fixed duration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// What the user is doing during a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseState {
    Inhale,
    HoldAfterInhale,
    Exhale,
    HoldAfterExhale,
}

impl PhaseState {
    /// Translation key for the on-screen instruction.
    ///
    /// Both holds share one instruction.
    pub fn instruction_key(&self) -> &'static str {
        match self {
            PhaseState::Inhale => "inhale",
            PhaseState::HoldAfterInhale | PhaseState::HoldAfterExhale => "hold",
            PhaseState::Exhale => "exhale",
        }
    }

    /// Returns true for either hold.
    pub fn is_hold(&self) -> bool {
        matches!(self, PhaseState::HoldAfterInhale | PhaseState::HoldAfterExhale)
    }
}

impl fmt::Display for PhaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PhaseState::Inhale => "inhale",
            PhaseState::HoldAfterInhale => "hold_after_inhale",
            PhaseState::Exhale => "exhale",
            PhaseState::HoldAfterExhale => "hold_after_exhale",
        };
        write!(f, "{}", s)
    }
}

/// One step of a breathing pattern.
///
/// A phase on its own is plain data; positivity of the duration is enforced
/// when phases are assembled into a [`Cycle`](super::Cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase {
    pub state: PhaseState,
    pub duration_seconds: u32,
}

impl Phase {
    pub fn new(state: PhaseState, duration_seconds: u32) -> Self {
        Self {
            state,
            duration_seconds,
        }
    }

    pub fn inhale(duration_seconds: u32) -> Self {
        Self::new(PhaseState::Inhale, duration_seconds)
    }

    pub fn hold_after_inhale(duration_seconds: u32) -> Self {
        Self::new(PhaseState::HoldAfterInhale, duration_seconds)
    }

    pub fn exhale(duration_seconds: u32) -> Self {
        Self::new(PhaseState::Exhale, duration_seconds)
    }

    pub fn hold_after_exhale(duration_seconds: u32) -> Self {
        Self::new(PhaseState::HoldAfterExhale, duration_seconds)
    }

    /// Wall-clock length of the phase.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_share_an_instruction() {
        assert_eq!(PhaseState::HoldAfterInhale.instruction_key(), "hold");
        assert_eq!(PhaseState::HoldAfterExhale.instruction_key(), "hold");
        assert_eq!(PhaseState::Inhale.instruction_key(), "inhale");
        assert_eq!(PhaseState::Exhale.instruction_key(), "exhale");
    }

    #[test]
    fn is_hold_works_correctly() {
        assert!(PhaseState::HoldAfterInhale.is_hold());
        assert!(PhaseState::HoldAfterExhale.is_hold());
        assert!(!PhaseState::Inhale.is_hold());
        assert!(!PhaseState::Exhale.is_hold());
    }

    #[test]
    fn phase_state_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&PhaseState::HoldAfterInhale).unwrap(),
            "\"hold_after_inhale\""
        );
        let state: PhaseState = serde_json::from_str("\"hold_after_exhale\"").unwrap();
        assert_eq!(state, PhaseState::HoldAfterExhale);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(PhaseState::HoldAfterExhale.to_string(), "hold_after_exhale");
    }

    #[test]
    fn phase_duration_is_whole_seconds() {
        assert_eq!(Phase::exhale(8).duration(), Duration::from_secs(8));
    }

    #[test]
    fn negative_duration_is_rejected_at_deserialization() {
        let result = serde_json::from_str::<Phase>(r#"{"state":"inhale","duration_seconds":-4}"#);
        assert!(result.is_err());
    }
}
