//! Cycle value object: one repeatable breathing pattern.

use serde::{Deserialize, Serialize};

use super::{CycleError, Phase};

/// Ordered, non-empty sequence of phases.
///
/// # Invariants
///
/// - At least one phase
/// - Every phase lasts at least one second
/// - The whole cycle fits in `u32` seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Phase>", into = "Vec<Phase>")]
pub struct Cycle {
    phases: Vec<Phase>,
    cycle_seconds: u32,
}

impl Cycle {
    /// Validates and wraps a list of phases.
    ///
    /// # Errors
    ///
    /// - `Empty` if no phases are given
    /// - `NonPositiveDuration` for the first phase lasting zero seconds
    /// - `TooLong` if the durations add up past `u32::MAX` seconds
    pub fn new(phases: Vec<Phase>) -> Result<Self, CycleError> {
        if phases.is_empty() {
            return Err(CycleError::Empty);
        }
        if let Some((index, phase)) = phases
            .iter()
            .enumerate()
            .find(|(_, phase)| phase.duration_seconds == 0)
        {
            return Err(CycleError::NonPositiveDuration {
                index,
                state: phase.state,
            });
        }
        let cycle_seconds = phases
            .iter()
            .try_fold(0u32, |total, phase| total.checked_add(phase.duration_seconds))
            .ok_or(CycleError::TooLong)?;
        Ok(Self {
            phases,
            cycle_seconds,
        })
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Phase at `index`, if in range.
    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Index that follows `index` on the ring.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phases.len()
    }

    /// Sum of all phase durations, never zero.
    pub fn cycle_seconds(&self) -> u32 {
        self.cycle_seconds
    }

    /// How many whole cycles fit into a session of `session_seconds`.
    pub fn cycles_in(&self, session_seconds: u32) -> u32 {
        session_seconds / self.cycle_seconds
    }
}

impl TryFrom<Vec<Phase>> for Cycle {
    type Error = CycleError;

    fn try_from(phases: Vec<Phase>) -> Result<Self, Self::Error> {
        Self::new(phases)
    }
}

impl From<Cycle> for Vec<Phase> {
    fn from(cycle: Cycle) -> Self {
        cycle.phases
    }
}
