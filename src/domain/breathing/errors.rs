//! Breathing-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::PhaseState;

/// A cycle definition that cannot be run.
///
/// These are configuration errors: they are reported at the point of use and
/// never clamped or retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error("Cycle must contain at least one phase")]
    Empty,

    #[error("Phase {index} ({state}) must last at least one second")]
    NonPositiveDuration { index: usize, state: PhaseState },

    #[error("Cycle lasts longer than {} seconds", u32::MAX)]
    TooLong,
}

/// Misuse of the phase sequencer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    #[error("Invalid cycle: {0}")]
    InvalidCycle(#[from] CycleError),

    #[error("Sequencer is already running; stop it before starting again")]
    AlreadyRunning,
}

/// Errors raised by the breathing session controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session is too short for a single cycle ({cycle_seconds}s cycle, {session_seconds}s session)")]
    Inapplicable {
        cycle_seconds: u32,
        session_seconds: u32,
    },

    #[error(transparent)]
    Sequencer(#[from] SequencerError),

    #[error("Invalid state: {0}")]
    InvalidState(#[from] ValidationError),
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Inapplicable { .. } => ErrorCode::SessionInapplicable,
            SessionError::Sequencer(SequencerError::InvalidCycle(_)) => ErrorCode::InvalidCycle,
            SessionError::Sequencer(SequencerError::AlreadyRunning) => {
                ErrorCode::SequencerAlreadyRunning
            }
            SessionError::InvalidState(_) => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<CycleError> for DomainError {
    fn from(err: CycleError) -> Self {
        let domain = DomainError::new(ErrorCode::InvalidCycle, err.to_string());
        match err {
            CycleError::Empty | CycleError::TooLong => domain,
            CycleError::NonPositiveDuration { index, .. } => {
                domain.with_detail("phase_index", index.to_string())
            }
        }
    }
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
