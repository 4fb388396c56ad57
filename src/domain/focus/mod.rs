//! Focus timers: Pomodoro intervals and the two-minute rule.

mod countdown;
mod pomodoro;
mod two_minute;

pub use countdown::{format_mm_ss, Countdown};
pub use pomodoro::{PomodoroEvent, PomodoroMode, PomodoroSettings, PomodoroTimer};
pub use two_minute::{TwoMinuteStatus, TwoMinuteTask, DEFAULT_TWO_MINUTE_SECONDS};
