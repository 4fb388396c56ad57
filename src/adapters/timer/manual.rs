//! Virtual-clock timer for deterministic tests.
//!
//! Time only moves when the test calls [`ManualTimer::advance`]. Expiries are
//! delivered in deadline order, so a sequencer that re-arms from inside the
//! callback sees its next timer fire within the same advance if the window
//! covers it.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::ports::{PhaseTimer, TimerId};

#[derive(Debug, Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    pending: BTreeSet<(Duration, TimerId)>,
}

/// Manually advanced [`PhaseTimer`].
///
/// Clones share one clock: hand one clone to the sequencer and keep another
/// to drive time.
///
/// # Example
///
/// ```ignore
/// let clock = ManualTimer::new();
/// let mut session = BreathingSession::new(exercise, clock.clone());
/// session.play()?;
/// clock.advance(Duration::from_secs(16), |id| {
///     session.on_timer_fired(id);
/// });
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    clock: Arc<Mutex<Clock>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Clock> {
        // A panicking test callback must not wedge the clock for the rest of
        // the test.
        self.clock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of armed, unfired timers.
    pub fn pending_count(&self) -> usize {
        self.lock().pending.len()
    }

    /// Moves virtual time forward by `by`, calling `on_fire` for each timer
    /// that comes due, earliest first.
    ///
    /// Timers armed from inside `on_fire` are honoured if they fall within
    /// the window. The clock lock is not held while `on_fire` runs.
    pub fn advance(&self, by: Duration, mut on_fire: impl FnMut(TimerId)) {
        let target = self.lock().now + by;
        loop {
            let due = {
                let mut clock = self.lock();
                match clock.pending.iter().next().copied() {
                    Some((deadline, id)) if deadline <= target => {
                        clock.pending.remove(&(deadline, id));
                        clock.now = deadline;
                        Some(id)
                    }
                    _ => {
                        clock.now = target;
                        None
                    }
                }
            };
            match due {
                Some(id) => on_fire(id),
                None => break,
            }
        }
    }
}

impl PhaseTimer for ManualTimer {
    fn arm(&mut self, delay: Duration) -> TimerId {
        let mut clock = self.lock();
        clock.next_id += 1;
        let id = TimerId::new(clock.next_id);
        let deadline = clock.now + delay;
        clock.pending.insert((deadline, id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.lock().pending.retain(|(_, pending)| *pending != id);
    }
}
