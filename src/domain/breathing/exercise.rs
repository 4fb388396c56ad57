//! Breathing exercise definitions as served by the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::Cycle;

/// Maximum length for an exercise slug.
pub const MAX_SLUG_LENGTH: usize = 64;

/// URL-safe exercise identifier, e.g. `box-breathing`.
///
/// Lowercase ASCII letters and digits separated by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExerciseSlug(String);

impl ExerciseSlug {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        if value.len() > MAX_SLUG_LENGTH {
            return Err(ValidationError::invalid_format(
                "slug",
                format!("must be {} characters or less", MAX_SLUG_LENGTH),
            ));
        }
        let well_formed = value
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        if !well_formed {
            return Err(ValidationError::invalid_format(
                "slug",
                "expected lowercase letters and digits separated by single hyphens",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExerciseSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ExerciseSlug {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ExerciseSlug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExerciseSlug> for String {
    fn from(slug: ExerciseSlug) -> Self {
        slug.0
    }
}

/// One illustrated step of the "how to perform" screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    pub text_key: String,
    pub diagram_hint: String,
}

impl InstructionStep {
    pub fn new(text_key: impl Into<String>, diagram_hint: impl Into<String>) -> Self {
        Self {
            text_key: text_key.into(),
            diagram_hint: diagram_hint.into(),
        }
    }
}

/// A catalog entry: a named breathing pattern and how long to practise it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExerciseRecord", into = "ExerciseRecord")]
pub struct Exercise {
    slug: ExerciseSlug,
    name_key: String,
    description_key: String,
    duration_minutes: u32,
    instruction_steps: Vec<InstructionStep>,
    cycle: Cycle,
}

impl Exercise {
    /// # Errors
    ///
    /// - `OutOfRange` if `duration_minutes` is zero
    /// - `EmptyField` if the name key is blank
    pub fn new(
        slug: ExerciseSlug,
        name_key: impl Into<String>,
        description_key: impl Into<String>,
        duration_minutes: u32,
        instruction_steps: Vec<InstructionStep>,
        cycle: Cycle,
    ) -> Result<Self, ValidationError> {
        let name_key = name_key.into();
        if name_key.trim().is_empty() {
            return Err(ValidationError::empty_field("name_key"));
        }
        if duration_minutes == 0 {
            return Err(ValidationError::out_of_range(
                "duration_minutes",
                1,
                i64::from(u32::MAX / 60),
                0,
            ));
        }
        Ok(Self {
            slug,
            name_key,
            description_key: description_key.into(),
            duration_minutes,
            instruction_steps,
            cycle,
        })
    }

    pub fn slug(&self) -> &ExerciseSlug {
        &self.slug
    }

    pub fn name_key(&self) -> &str {
        &self.name_key
    }

    pub fn description_key(&self) -> &str {
        &self.description_key
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn instruction_steps(&self) -> &[InstructionStep] {
        &self.instruction_steps
    }

    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    /// Total session length in seconds.
    pub fn session_seconds(&self) -> u32 {
        self.duration_minutes.saturating_mul(60)
    }

    /// Whole cycles that fit in one session: `floor(session / cycle)`.
    pub fn total_cycles(&self) -> u32 {
        self.cycle.cycles_in(self.session_seconds())
    }
}

/// Serialized shape of an [`Exercise`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExerciseRecord {
    slug: ExerciseSlug,
    name_key: String,
    #[serde(default)]
    description_key: String,
    duration_minutes: u32,
    #[serde(default)]
    instruction_steps: Vec<InstructionStep>,
    cycle: Cycle,
}

impl TryFrom<ExerciseRecord> for Exercise {
    type Error = ValidationError;

    fn try_from(record: ExerciseRecord) -> Result<Self, Self::Error> {
        Exercise::new(
            record.slug,
            record.name_key,
            record.description_key,
            record.duration_minutes,
            record.instruction_steps,
            record.cycle,
        )
    }
}

impl From<Exercise> for ExerciseRecord {
    fn from(exercise: Exercise) -> Self {
        Self {
            slug: exercise.slug,
            name_key: exercise.name_key,
            description_key: exercise.description_key,
            duration_minutes: exercise.duration_minutes,
            instruction_steps: exercise.instruction_steps,
            cycle: exercise.cycle,
        }
    }
}
