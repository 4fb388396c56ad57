//! Phase timer port.
//!
//! A cancellable one-shot timer. The breathing sequencer arms one timer per
//! phase and is told when it fires; it never sleeps itself. Adapters decide
//! what "time" means: a virtual clock in tests, tokio sleeps in the server.
//!
//! Expiry delivery is the adapter's job. Whoever drives the sequencer hands
//! each fired [`TimerId`] back to it, so the sequencer can drop expiries that
//! belong to a timer it already cancelled.

use std::fmt;
use std::time::Duration;

/// Handle for one armed timer. Unique per adapter instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Port for scheduling one-shot phase timers.
pub trait PhaseTimer: Send {
    /// Schedule a single expiry `delay` from now.
    fn arm(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending expiry.
    ///
    /// Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

impl<T: PhaseTimer + ?Sized> PhaseTimer for Box<T> {
    fn arm(&mut self, delay: Duration) -> TimerId {
        (**self).arm(delay)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingTimer {
        armed: u64,
    }

    impl PhaseTimer for CountingTimer {
        fn arm(&mut self, _delay: Duration) -> TimerId {
            self.armed += 1;
            TimerId::new(self.armed)
        }

        fn cancel(&mut self, _id: TimerId) {}
    }

    #[test]
    fn phase_timer_is_object_safe() {
        fn _accepts_dyn(_timer: &mut dyn PhaseTimer) {}
    }

    #[test]
    fn boxed_timer_delegates() {
        let mut timer: Box<dyn PhaseTimer> = Box::new(CountingTimer { armed: 0 });
        assert_eq!(timer.arm(Duration::from_secs(4)), TimerId::new(1));
        assert_eq!(timer.arm(Duration::from_secs(4)), TimerId::new(2));
    }

    #[test]
    fn timer_id_displays_with_prefix() {
        assert_eq!(TimerId::new(7).to_string(), "timer-7");
    }
}
