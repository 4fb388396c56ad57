//! Phase sequencer: the ring state machine at the heart of a breathing
//! session.
//!
//! ```text
//!            start                tick             tick                 tick
//!   Idle ──────────▶ InPhase(0) ──────▶ InPhase(1) ──────▶ ... InPhase(n-1) ──┐
//!    ▲                   ▲                                                     │
//!    │ stop (any state)  └──────────── wrap: on_cycle_complete ◀───────────────┘
//! ```
//!
//! The sequencer never sleeps. It arms one timer per phase through the
//! [`PhaseTimer`] port and advances when the driver reports that timer as
//! fired. Only the currently armed timer counts; anything else is a stale
//! expiry from before a `stop` and is dropped.

use std::fmt;

use crate::ports::{PhaseTimer, TimerId};

use super::{Cycle, Phase, SequencerError};

/// Callback invoked once per completed cycle.
pub type CycleCompleteHook = Box<dyn FnMut() + Send>;

/// Where the sequencer is on its ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerState {
    #[default]
    Idle,
    InPhase(usize),
}

/// Result of one phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseAdvance {
    /// Index of the phase just entered.
    pub index: usize,
    /// The phase just entered.
    pub phase: Phase,
    /// True when this transition wrapped back to the first phase.
    pub cycle_completed: bool,
}

/// Advances through a cycle's phases, one timer per phase, until stopped.
///
/// # Double start
///
/// `start` while running is rejected with [`SequencerError::AlreadyRunning`]
/// and leaves the running sequence untouched. Call `stop` first to restart.
pub struct PhaseSequencer<T: PhaseTimer> {
    timer: T,
    cycle: Option<Cycle>,
    state: SequencerState,
    pending: Option<TimerId>,
    on_cycle_complete: Option<CycleCompleteHook>,
}

impl<T: PhaseTimer> PhaseSequencer<T> {
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            cycle: None,
            state: SequencerState::Idle,
            pending: None,
            on_cycle_complete: None,
        }
    }

    /// Installs the completion callback.
    pub fn with_cycle_complete(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.on_cycle_complete = Some(Box::new(hook));
        self
    }

    /// Enters the first phase of `phases` and arms its timer.
    ///
    /// # Errors
    ///
    /// - `InvalidCycle` if `phases` is empty or holds a zero-length phase;
    ///   nothing is armed
    /// - `AlreadyRunning` if a sequence is in progress
    pub fn start(&mut self, phases: &[Phase]) -> Result<(), SequencerError> {
        if self.is_running() {
            return Err(SequencerError::AlreadyRunning);
        }
        let cycle = Cycle::new(phases.to_vec())?;
        let first = cycle.phases()[0];

        self.cycle = Some(cycle);
        self.state = SequencerState::InPhase(0);
        self.pending = Some(self.timer.arm(first.duration()));
        Ok(())
    }

    /// Cancels the pending timer and returns to `Idle`. Safe from any state.
    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.timer.cancel(id);
        }
        self.cycle = None;
        self.state = SequencerState::Idle;
    }

    /// Handles a timer expiry reported by the driver.
    ///
    /// Returns `None` for stale or unknown timers, which leave the state
    /// untouched. Otherwise moves to the next phase; on a wrap the completion
    /// callback runs before the next timer is armed.
    pub fn on_timer_fired(&mut self, id: TimerId) -> Option<PhaseAdvance> {
        if self.pending != Some(id) {
            return None;
        }
        self.pending = None;

        let (SequencerState::InPhase(index), Some(cycle)) = (self.state, self.cycle.as_ref()) else {
            return None;
        };
        let next = cycle.next_index(index);
        let phase = cycle.phases()[next];
        let cycle_completed = next == 0;

        self.state = SequencerState::InPhase(next);
        if cycle_completed {
            if let Some(hook) = self.on_cycle_complete.as_mut() {
                hook();
            }
        }
        self.pending = Some(self.timer.arm(phase.duration()));

        Some(PhaseAdvance {
            index: next,
            phase,
            cycle_completed,
        })
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SequencerState::InPhase(_))
    }

    /// Phase being timed, `None` while idle.
    pub fn current_phase(&self) -> Option<&Phase> {
        match self.state {
            SequencerState::Idle => None,
            SequencerState::InPhase(index) => self.cycle.as_ref().and_then(|c| c.phase(index)),
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SequencerState::Idle => None,
            SequencerState::InPhase(index) => Some(index),
        }
    }

    /// Timer currently armed for the running phase.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}

impl<T: PhaseTimer> fmt::Debug for PhaseSequencer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseSequencer")
            .field("state", &self.state)
            .field("cycle", &self.cycle)
            .field("pending", &self.pending)
            .field("has_hook", &self.on_cycle_complete.is_some())
            .finish()
    }
}
