//! One-second countdown shared by the focus timers.

use serde::Serialize;

/// Formats whole seconds as zero-padded `MM:SS`.
///
/// Minutes are not wrapped at 60: 3600 seconds is `60:00`.
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Counts whole seconds down from a fixed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    total_seconds: u32,
    remaining_seconds: u32,
}

impl Countdown {
    pub fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
        }
    }

    /// Removes one second. Returns true on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds == 0 {
            return false;
        }
        self.remaining_seconds -= 1;
        self.remaining_seconds == 0
    }

    /// Back to the full duration.
    pub fn restart(&mut self) {
        self.remaining_seconds = self.total_seconds;
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }

    pub fn formatted(&self) -> String {
        format_mm_ss(self.remaining_seconds)
    }

    /// Elapsed share, 0 to 100.
    pub fn progress_percent(&self) -> f64 {
        if self.total_seconds == 0 {
            return 100.0;
        }
        let elapsed = self.total_seconds - self.remaining_seconds;
        f64::from(elapsed) * 100.0 / f64::from(self.total_seconds)
    }
}
