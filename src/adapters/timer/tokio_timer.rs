//! Tokio-backed phase timer.
//!
//! Each armed timer is a spawned task that sleeps and then reports its id on
//! an unbounded channel. Cancelling aborts the task, so a cancelled sleep
//! never reports. The receiving side may still see an id that was already in
//! flight when `cancel` ran; the sequencer drops those as stale.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::ports::{PhaseTimer, TimerId};

/// [`PhaseTimer`] on top of `tokio::time::sleep`.
///
/// # Panics
///
/// `arm` spawns onto the current Tokio runtime and panics outside one.
#[derive(Debug)]
pub struct TokioPhaseTimer {
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
    fired_tx: mpsc::UnboundedSender<TimerId>,
}

impl TokioPhaseTimer {
    /// Creates the timer and the receiver its expiries arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let timer = Self {
            next_id: 0,
            tasks: HashMap::new(),
            fired_tx,
        };
        (timer, fired_rx)
    }

    /// Number of sleeps that have not yet finished or been cancelled.
    pub fn active_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl PhaseTimer for TokioPhaseTimer {
    fn arm(&mut self, delay: Duration) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());

        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        let tx = self.fired_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session ended; nothing to notify.
            let _ = tx.send(id);
        });
        self.tasks.insert(id, task);
        tracing::trace!(timer = %id, delay_ms = delay.as_millis() as u64, "phase timer armed");
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
            tracing::trace!(timer = %id, "phase timer cancelled");
        }
    }
}

impl Drop for TokioPhaseTimer {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
