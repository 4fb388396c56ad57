//! HTTP handlers for focus endpoints.

use axum::extract::{Json, State};

use crate::domain::focus::{PomodoroSettings, DEFAULT_TWO_MINUTE_SECONDS};

use super::dto::{FocusSettingsResponse, IntervalResponse, PomodoroSettingsResponse};

/// Focus timer durations served to clients.
#[derive(Debug, Clone)]
pub struct FocusAppState {
    pub pomodoro: PomodoroSettings,
    pub two_minute_seconds: u32,
}

impl Default for FocusAppState {
    fn default() -> Self {
        Self {
            pomodoro: PomodoroSettings::default(),
            two_minute_seconds: DEFAULT_TWO_MINUTE_SECONDS,
        }
    }
}

/// GET /api/focus/settings - Pomodoro and two-minute durations
pub async fn get_focus_settings(State(state): State<FocusAppState>) -> Json<FocusSettingsResponse> {
    Json(FocusSettingsResponse {
        pomodoro: PomodoroSettingsResponse::from(&state.pomodoro),
        two_minute: IntervalResponse::new(state.two_minute_seconds),
    })
}
