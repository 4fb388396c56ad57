//! Two-minute rule: if a task takes less than two minutes, do it now.

use serde::Serialize;

use super::Countdown;

/// Default time box for a two-minute task.
pub const DEFAULT_TWO_MINUTE_SECONDS: u32 = 2 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TwoMinuteStatus {
    Idle,
    Running,
    Done,
}

/// A single time-boxed task.
#[derive(Debug, Clone)]
pub struct TwoMinuteTask {
    countdown: Countdown,
    task: String,
    status: TwoMinuteStatus,
}

impl Default for TwoMinuteTask {
    fn default() -> Self {
        Self::new(DEFAULT_TWO_MINUTE_SECONDS)
    }
}

impl TwoMinuteTask {
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            countdown: Countdown::new(duration_seconds),
            task: String::new(),
            status: TwoMinuteStatus::Idle,
        }
    }

    /// Starts a fresh time box for `task`.
    pub fn start(&mut self, task: impl Into<String>) {
        self.task = task.into().trim().to_string();
        self.countdown.restart();
        self.status = TwoMinuteStatus::Running;
    }

    /// One elapsed second. Returns true when time runs out and the task is
    /// marked done.
    pub fn tick(&mut self) -> bool {
        if self.status != TwoMinuteStatus::Running {
            return false;
        }
        if self.countdown.tick() {
            self.status = TwoMinuteStatus::Done;
            return true;
        }
        false
    }

    /// Finishes early.
    pub fn mark_done(&mut self) {
        self.status = TwoMinuteStatus::Done;
    }

    /// Clears the task and restores the full time box.
    pub fn reset(&mut self) {
        self.task.clear();
        self.countdown.restart();
        self.status = TwoMinuteStatus::Idle;
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn status(&self) -> TwoMinuteStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TwoMinuteStatus::Running
    }

    pub fn is_done(&self) -> bool {
        self.status == TwoMinuteStatus::Done
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining_seconds()
    }

    pub fn formatted(&self) -> String {
        self.countdown.formatted()
    }

    pub fn progress_percent(&self) -> f64 {
        self.countdown.progress_percent()
    }
}
