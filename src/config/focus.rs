//! Focus timer configuration

use serde::Deserialize;

use crate::domain::focus::{PomodoroSettings, DEFAULT_TWO_MINUTE_SECONDS};

use super::error::ValidationError;

/// Durations for the Pomodoro and two-minute timers
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub work_seconds: u32,
    pub short_break_seconds: u32,
    pub long_break_seconds: u32,
    pub pomodoros_before_long_break: u32,
    pub two_minute_seconds: u32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        let pomodoro = PomodoroSettings::default();
        Self {
            work_seconds: pomodoro.work_seconds,
            short_break_seconds: pomodoro.short_break_seconds,
            long_break_seconds: pomodoro.long_break_seconds,
            pomodoros_before_long_break: pomodoro.pomodoros_before_long_break,
            two_minute_seconds: DEFAULT_TWO_MINUTE_SECONDS,
        }
    }
}

impl FocusConfig {
    /// Pomodoro intervals as domain settings
    pub fn pomodoro(&self) -> PomodoroSettings {
        PomodoroSettings {
            work_seconds: self.work_seconds,
            short_break_seconds: self.short_break_seconds,
            long_break_seconds: self.long_break_seconds,
            pomodoros_before_long_break: self.pomodoros_before_long_break,
        }
    }

    /// Validate focus configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("work_seconds", self.work_seconds),
            ("short_break_seconds", self.short_break_seconds),
            ("long_break_seconds", self.long_break_seconds),
            ("pomodoros_before_long_break", self.pomodoros_before_long_break),
            ("two_minute_seconds", self.two_minute_seconds),
        ] {
            if value == 0 {
                return Err(ValidationError::ZeroFocusDuration(name));
            }
        }
        Ok(())
    }
}
