//! State machine trait for status enums.
//!
//! Gives the breathing session status and the Pomodoro mode one shared way
//! to validate and perform transitions.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for PomodoroMode {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Idle, Work) | (Work, ShortBreak) | ...)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Work],
///             // ... etc
///         }
///     }
/// }
///
/// let next = current_mode.transition_to(PomodoroMode::Work)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Off,
        Warming,
        On,
        Broken,
    }

    impl StateMachine for Light {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Light::*;
            matches!(
                (self, target),
                (Off, Warming) | (Warming, On) | (On, Off) | (Warming, Broken) | (On, Broken)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Light::*;
            match self {
                Off => vec![Warming],
                Warming => vec![On, Broken],
                On => vec![Off, Broken],
                Broken => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Light::Off.transition_to(Light::Warming), Ok(Light::Warming));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        assert!(Light::Off.transition_to(Light::On).is_err());
    }

    #[test]
    fn is_terminal_only_for_states_without_exits() {
        assert!(Light::Broken.is_terminal());
        assert!(!Light::Off.is_terminal());
        assert!(!Light::On.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for state in [Light::Off, Light::Warming, Light::On, Light::Broken] {
            for target in state.valid_transitions() {
                assert!(
                    state.can_transition_to(&target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    state,
                    target
                );
            }
        }
    }
}
