//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait and error
//! types that form the vocabulary of the WarmNest domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
