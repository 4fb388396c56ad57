//! Data Transfer Objects for focus endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::focus::{format_mm_ss, PomodoroSettings};

/// One configured interval, in seconds and as shown on the timer face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalResponse {
    pub seconds: u32,
    pub display: String,
}

impl IntervalResponse {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds,
            display: format_mm_ss(seconds),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomodoroSettingsResponse {
    pub work: IntervalResponse,
    pub short_break: IntervalResponse,
    pub long_break: IntervalResponse,
    pub pomodoros_before_long_break: u32,
}

impl From<&PomodoroSettings> for PomodoroSettingsResponse {
    fn from(settings: &PomodoroSettings) -> Self {
        Self {
            work: IntervalResponse::new(settings.work_seconds),
            short_break: IntervalResponse::new(settings.short_break_seconds),
            long_break: IntervalResponse::new(settings.long_break_seconds),
            pomodoros_before_long_break: settings.pomodoros_before_long_break,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSettingsResponse {
    pub pomodoro: PomodoroSettingsResponse,
    pub two_minute: IntervalResponse,
}
