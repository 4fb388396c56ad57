//! Breathing session controller.
//!
//! Wraps a [`PhaseSequencer`] with the exercise's session length: counts
//! completed cycles, stops when the target is reached, and exposes the
//! play/pause/reset controls of the exercise screen.
//!
//! ```text
//!   Ready ──play──▶ Running ──pause──▶ Paused
//!                    │  ▲                 │
//!                    │  └──────play───────┘
//!                    ▼
//!                 Finished ──play──▶ Running (count restarts)
//!
//!   reset: any (except Inapplicable) ──▶ Ready
//!   Inapplicable: session shorter than one cycle, fixed at creation
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;
use crate::ports::{PhaseTimer, TimerId};

use super::{Exercise, ExerciseSlug, Phase, PhaseAdvance, PhaseSequencer, PhaseState, SessionError};

/// Lifecycle of a breathing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Ready,
    Running,
    Paused,
    Finished,
    /// The session is shorter than a single cycle.
    Inapplicable,
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (Ready, Running)
                | (Running, Paused)
                | (Running, Finished)
                | (Running, Ready)
                | (Paused, Running)
                | (Paused, Ready)
                | (Finished, Running)
                | (Finished, Ready)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            Ready => vec![Running],
            Running => vec![Paused, Finished, Ready],
            Paused => vec![Running, Ready],
            Finished => vec![Running, Ready],
            Inapplicable => vec![],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Ready => "ready",
            SessionStatus::Running => "running",
            SessionStatus::Paused => "paused",
            SessionStatus::Finished => "finished",
            SessionStatus::Inapplicable => "inapplicable",
        };
        write!(f, "{}", s)
    }
}

/// The phase being shown, as sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseView {
    pub index: usize,
    pub state: PhaseState,
    pub instruction_key: &'static str,
    pub duration_seconds: u32,
}

impl PhaseView {
    fn new(index: usize, phase: &Phase) -> Self {
        Self {
            index,
            state: phase.state,
            instruction_key: phase.state.instruction_key(),
            duration_seconds: phase.duration_seconds,
        }
    }
}

/// Point-in-time view of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub exercise: ExerciseSlug,
    pub status: SessionStatus,
    pub is_running: bool,
    pub current_phase: Option<PhaseView>,
    pub completed_cycles: u32,
    pub total_cycles: u32,
    pub progress_percent: f64,
}

/// Drives one exercise from start to finish.
pub struct BreathingSession<T: PhaseTimer> {
    exercise: Exercise,
    sequencer: PhaseSequencer<T>,
    status: SessionStatus,
    total_cycles: u32,
    completed_cycles: u32,
    on_cycle_complete: Option<Box<dyn FnMut(u32) + Send>>,
}

impl<T: PhaseTimer> BreathingSession<T> {
    pub fn new(exercise: Exercise, timer: T) -> Self {
        let total_cycles = exercise.total_cycles();
        let status = if total_cycles == 0 {
            SessionStatus::Inapplicable
        } else {
            SessionStatus::Ready
        };
        Self {
            exercise,
            sequencer: PhaseSequencer::new(timer),
            status,
            total_cycles,
            completed_cycles: 0,
            on_cycle_complete: None,
        }
    }

    /// Installs a callback receiving the completed-cycle count after each
    /// cycle.
    pub fn with_cycle_complete(mut self, hook: impl FnMut(u32) + Send + 'static) -> Self {
        self.on_cycle_complete = Some(Box::new(hook));
        self
    }

    /// Starts or resumes the breathing pattern at its first phase.
    ///
    /// Resuming after a pause keeps the completed count; playing a finished
    /// session starts the count over. No-op while running.
    ///
    /// # Errors
    ///
    /// - `Inapplicable` if not even one cycle fits in the session
    pub fn play(&mut self) -> Result<(), SessionError> {
        if self.status == SessionStatus::Inapplicable {
            return Err(SessionError::Inapplicable {
                cycle_seconds: self.exercise.cycle().cycle_seconds(),
                session_seconds: self.exercise.session_seconds(),
            });
        }
        if self.status == SessionStatus::Running {
            return Ok(());
        }

        let next = self.status.transition_to(SessionStatus::Running)?;
        if self.status == SessionStatus::Finished {
            self.completed_cycles = 0;
        }
        self.sequencer.start(self.exercise.cycle().phases())?;
        self.status = next;
        Ok(())
    }

    /// Stops the sequencer. No-op unless running.
    pub fn pause(&mut self) {
        if self.status != SessionStatus::Running {
            return;
        }
        self.sequencer.stop();
        self.status = SessionStatus::Paused;
    }

    /// Pauses when running, plays otherwise.
    pub fn toggle(&mut self) -> Result<(), SessionError> {
        if self.status == SessionStatus::Running {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Stops and clears progress. An inapplicable session stays inapplicable.
    pub fn reset(&mut self) {
        self.sequencer.stop();
        self.completed_cycles = 0;
        if self.status != SessionStatus::Inapplicable {
            self.status = SessionStatus::Ready;
        }
    }

    /// Forwards a timer expiry to the sequencer and accounts for completed
    /// cycles.
    pub fn on_timer_fired(&mut self, id: TimerId) -> Option<PhaseAdvance> {
        if self.status != SessionStatus::Running {
            return None;
        }
        let advance = self.sequencer.on_timer_fired(id)?;
        if advance.cycle_completed {
            self.completed_cycles += 1;
            if let Some(hook) = self.on_cycle_complete.as_mut() {
                hook(self.completed_cycles);
            }
            if self.completed_cycles >= self.total_cycles {
                self.sequencer.stop();
                self.status = SessionStatus::Finished;
            }
        }
        Some(advance)
    }

    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn total_cycles(&self) -> u32 {
        self.total_cycles
    }

    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    pub fn current_phase(&self) -> Option<&Phase> {
        self.sequencer.current_phase()
    }

    /// Completed share of the session, 0 to 100. An inapplicable session
    /// reads as complete.
    pub fn progress_percent(&self) -> f64 {
        if self.total_cycles == 0 {
            return 100.0;
        }
        let done = self.completed_cycles.min(self.total_cycles);
        f64::from(done) * 100.0 / f64::from(self.total_cycles)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let current_phase = self
            .sequencer
            .current_index()
            .zip(self.sequencer.current_phase())
            .map(|(index, phase)| PhaseView::new(index, phase));
        SessionSnapshot {
            exercise: self.exercise.slug().clone(),
            status: self.status,
            is_running: self.is_running(),
            current_phase,
            completed_cycles: self.completed_cycles,
            total_cycles: self.total_cycles,
            progress_percent: self.progress_percent(),
        }
    }

    /// Timer the sequencer is waiting on, if any.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.sequencer.pending_timer()
    }

    pub fn timer(&self) -> &T {
        self.sequencer.timer()
    }

    pub fn timer_mut(&mut self) -> &mut T {
        self.sequencer.timer_mut()
    }
}

impl<T: PhaseTimer> fmt::Debug for BreathingSession<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreathingSession")
            .field("exercise", self.exercise.slug())
            .field("status", &self.status)
            .field("completed_cycles", &self.completed_cycles)
            .field("total_cycles", &self.total_cycles)
            .field("sequencer", &self.sequencer)
            .finish()
    }
}
