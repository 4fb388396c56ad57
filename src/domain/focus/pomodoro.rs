//! Pomodoro timer.
//!
//! Work intervals alternate with breaks; every `pomodoros_before_long_break`
//! work intervals earn a long break instead of a short one.
//!
//! ```text
//!   Idle ──start──▶ Work ──0──▶ ShortBreak ──0──▶ Work ...
//!                     │
//!                     └──0 (every Nth)──▶ LongBreak ──0──▶ Work (cycle count reset)
//!
//!   reset: any ──▶ Idle
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{StateMachine, ValidationError};

use super::Countdown;

/// What the Pomodoro timer is currently timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PomodoroMode {
    Idle,
    Work,
    ShortBreak,
    LongBreak,
}

impl StateMachine for PomodoroMode {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PomodoroMode::*;
        matches!(
            (self, target),
            (Idle, Work)
                | (Work, ShortBreak)
                | (Work, LongBreak)
                | (Work, Idle)
                | (ShortBreak, Work)
                | (ShortBreak, Idle)
                | (LongBreak, Work)
                | (LongBreak, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PomodoroMode::*;
        match self {
            Idle => vec![Work],
            Work => vec![ShortBreak, LongBreak, Idle],
            ShortBreak => vec![Work, Idle],
            LongBreak => vec![Work, Idle],
        }
    }
}

impl fmt::Display for PomodoroMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PomodoroMode::Idle => "idle",
            PomodoroMode::Work => "work",
            PomodoroMode::ShortBreak => "short_break",
            PomodoroMode::LongBreak => "long_break",
        };
        write!(f, "{}", s)
    }
}

/// Interval lengths for the Pomodoro timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PomodoroSettings {
    pub work_seconds: u32,
    pub short_break_seconds: u32,
    pub long_break_seconds: u32,
    pub pomodoros_before_long_break: u32,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_seconds: 25 * 60,
            short_break_seconds: 5 * 60,
            long_break_seconds: 15 * 60,
            pomodoros_before_long_break: 4,
        }
    }
}

impl PomodoroSettings {
    /// Every interval and the long-break spacing must be non-zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("work_seconds", self.work_seconds),
            ("short_break_seconds", self.short_break_seconds),
            ("long_break_seconds", self.long_break_seconds),
            ("pomodoros_before_long_break", self.pomodoros_before_long_break),
        ] {
            if value == 0 {
                return Err(ValidationError::out_of_range(
                    field,
                    1,
                    i64::from(u32::MAX),
                    0,
                ));
            }
        }
        Ok(())
    }

    /// Interval length for `mode`. Idle shows the work length.
    pub fn duration_for(&self, mode: PomodoroMode) -> u32 {
        match mode {
            PomodoroMode::Idle | PomodoroMode::Work => self.work_seconds,
            PomodoroMode::ShortBreak => self.short_break_seconds,
            PomodoroMode::LongBreak => self.long_break_seconds,
        }
    }
}

/// Announcement raised when the timer enters a new interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PomodoroEvent {
    pub mode: PomodoroMode,
    pub duration_seconds: u32,
}

impl PomodoroEvent {
    /// Translation key for the notification title.
    pub fn title_key(&self) -> &'static str {
        match self.mode {
            PomodoroMode::Work => "backToWork",
            PomodoroMode::ShortBreak => "takeYourBreak",
            PomodoroMode::LongBreak => "longBreakTime",
            PomodoroMode::Idle => "pomodoroTechnique",
        }
    }
}

/// Work/break interval timer, advanced one second at a time by `tick`.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    settings: PomodoroSettings,
    mode: PomodoroMode,
    countdown: Countdown,
    is_running: bool,
    pomodoros_this_cycle: u32,
    total_pomodoros: u32,
}

impl PomodoroTimer {
    /// # Errors
    ///
    /// - `OutOfRange` if any setting is zero
    pub fn new(settings: PomodoroSettings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(Self {
            settings,
            mode: PomodoroMode::Idle,
            countdown: Countdown::new(settings.work_seconds),
            is_running: false,
            pomodoros_this_cycle: 0,
            total_pomodoros: 0,
        })
    }

    /// Starts from idle (entering Work) or toggles pause.
    ///
    /// Returns the announcement when a work interval begins.
    pub fn start_pause(&mut self) -> Option<PomodoroEvent> {
        let event = if self.mode == PomodoroMode::Idle {
            Some(self.enter(PomodoroMode::Work))
        } else {
            None
        };
        self.is_running = !self.is_running;
        event
    }

    /// One elapsed second. Reaching zero switches interval on the same tick.
    pub fn tick(&mut self) -> Option<PomodoroEvent> {
        if !self.is_running || self.mode == PomodoroMode::Idle {
            return None;
        }
        if !self.countdown.tick() {
            return None;
        }

        let next = match self.mode {
            PomodoroMode::Work => {
                self.total_pomodoros += 1;
                self.pomodoros_this_cycle += 1;
                if self.pomodoros_this_cycle % self.settings.pomodoros_before_long_break == 0 {
                    PomodoroMode::LongBreak
                } else {
                    PomodoroMode::ShortBreak
                }
            }
            PomodoroMode::LongBreak => {
                self.pomodoros_this_cycle = 0;
                PomodoroMode::Work
            }
            PomodoroMode::ShortBreak | PomodoroMode::Idle => PomodoroMode::Work,
        };
        Some(self.enter(next))
    }

    /// Stops and clears all counters.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.mode = PomodoroMode::Idle;
        self.countdown = Countdown::new(self.settings.work_seconds);
        self.pomodoros_this_cycle = 0;
        self.total_pomodoros = 0;
    }

    fn enter(&mut self, mode: PomodoroMode) -> PomodoroEvent {
        debug_assert!(self.mode.can_transition_to(&mode));
        self.mode = mode;
        let duration_seconds = self.settings.duration_for(mode);
        self.countdown = Countdown::new(duration_seconds);
        PomodoroEvent {
            mode,
            duration_seconds,
        }
    }

    pub fn settings(&self) -> &PomodoroSettings {
        &self.settings
    }

    pub fn mode(&self) -> PomodoroMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.countdown.remaining_seconds()
    }

    pub fn formatted(&self) -> String {
        self.countdown.formatted()
    }

    pub fn pomodoros_this_cycle(&self) -> u32 {
        self.pomodoros_this_cycle
    }

    pub fn total_pomodoros(&self) -> u32 {
        self.total_pomodoros
    }

    /// Elapsed share of the current interval; 0 while idle.
    pub fn progress_percent(&self) -> f64 {
        if self.mode == PomodoroMode::Idle {
            return 0.0;
        }
        self.countdown.progress_percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_settings() -> PomodoroSettings {
        PomodoroSettings {
            work_seconds: 3,
            short_break_seconds: 1,
            long_break_seconds: 2,
            pomodoros_before_long_break: 2,
        }
    }

    fn tick_n(timer: &mut PomodoroTimer, n: u32) -> Vec<PomodoroEvent> {
        (0..n).filter_map(|_| timer.tick()).collect()
    }

    #[test]
    fn default_settings_match_classic_pomodoro() {
        let settings = PomodoroSettings::default();
        assert_eq!(settings.work_seconds, 1500);
        assert_eq!(settings.short_break_seconds, 300);
        assert_eq!(settings.long_break_seconds, 900);
        assert_eq!(settings.pomodoros_before_long_break, 4);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn zero_interval_fails_validation() {
        let settings = PomodoroSettings {
            short_break_seconds: 0,
            ..PomodoroSettings::default()
        };
        assert!(PomodoroTimer::new(settings).is_err());
    }

    #[test]
    fn new_timer_is_idle_showing_work_length() {
        let timer = PomodoroTimer::new(PomodoroSettings::default()).unwrap();
        assert_eq!(timer.mode(), PomodoroMode::Idle);
        assert!(!timer.is_running());
        assert_eq!(timer.formatted(), "25:00");
        assert_eq!(timer.progress_percent(), 0.0);
    }

    #[test]
    fn start_from_idle_enters_work_and_announces_it() {
        let mut timer = PomodoroTimer::new(quick_settings()).unwrap();
        let event = timer.start_pause().unwrap();
        assert_eq!(event.mode, PomodoroMode::Work);
        assert_eq!(event.title_key(), "backToWork");
        assert!(timer.is_running());
    }

    #[test]
    fn start_pause_toggles_without_announcing() {
        let mut timer = PomodoroTimer::new(quick_settings()).unwrap();
        timer.start_pause();
        assert!(timer.start_pause().is_none());
        assert!(!timer.is_running());
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_seconds(), 3);
    }

    #[test]
    fn tick_while_idle_does_nothing() {
        let mut timer = PomodoroTimer::new(quick_settings()).unwrap();
        assert!(timer.tick().is_none());
        assert_eq!(timer.mode(), PomodoroMode::Idle);
    }

    #[test]
    fn work_is_followed_by_short_break_then_work() {
        let mut timer = PomodoroTimer::new(quick_settings()).unwrap();
        timer.start_pause();

        let events = tick_n(&mut timer, 3);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].mode, PomodoroMode::ShortBreak);
        assert_eq!(events[0].title_key(), "takeYourBreak");
        assert_eq!(timer.total_pomodoros(), 1);
        assert_eq!(timer.pomodoros_this_cycle(), 1);

        let events = tick_n(&mut timer, 1);
        assert_eq!(events[0].mode, PomodoroMode::Work);
        assert_eq!(timer.remaining_seconds(), 3);
    }

    #[test]
    fn every_nth_pomodoro_earns_long_break_and_resets_cycle() {
        let mut timer = PomodoroTimer::new(quick_settings()).unwrap();
        timer.start_pause();

        tick_n(&mut timer, 3 + 1);
        let events = tick_n(&mut timer, 3);
        assert_eq!(events[0].mode, PomodoroMode::LongBreak);
        assert_eq!(events[0].title_key(), "longBreakTime");
        assert_eq!(timer.pomodoros_this_cycle(), 2);

        let events = tick_n(&mut timer, 2);
        assert_eq!(events[0].mode, PomodoroMode::Work);
        assert_eq!(timer.pomodoros_this_cycle(), 0);
        assert_eq!(timer.total_pomodoros(), 2);
    }

    #[test]
    fn reset_returns_to_idle_and_clears_counters() {
        let mut timer = PomodoroTimer::new(quick_settings()).unwrap();
        timer.start_pause();
        tick_n(&mut timer, 4);

        timer.reset();

        assert_eq!(timer.mode(), PomodoroMode::Idle);
        assert!(!timer.is_running());
        assert_eq!(timer.total_pomodoros(), 0);
        assert_eq!(timer.remaining_seconds(), 3);
    }

    #[test]
    fn progress_follows_current_interval() {
        let mut timer = PomodoroTimer::new(PomodoroSettings::default()).unwrap();
        timer.start_pause();
        tick_n(&mut timer, 750);
        assert_eq!(timer.progress_percent(), 50.0);
        assert_eq!(timer.formatted(), "12:30");
    }

    #[test]
    fn mode_machine_only_leaves_idle_for_work() {
        assert_eq!(PomodoroMode::Idle.valid_transitions(), vec![PomodoroMode::Work]);
        assert!(PomodoroMode::Idle.transition_to(PomodoroMode::ShortBreak).is_err());
        assert!(!PomodoroMode::LongBreak.is_terminal());
    }

    #[test]
    fn settings_deserialize_with_defaults() {
        let settings: PomodoroSettings = serde_json::from_str(r#"{"work_seconds": 600}"#).unwrap();
        assert_eq!(settings.work_seconds, 600);
        assert_eq!(settings.long_break_seconds, 900);
    }
}
