//! Data Transfer Objects for breathing endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::breathing::{Exercise, InstructionStep, Phase, PhaseState};

/// One phase of an exercise's cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResponse {
    pub state: PhaseState,
    pub instruction_key: String,
    pub duration_seconds: u32,
}

impl From<&Phase> for PhaseResponse {
    fn from(phase: &Phase) -> Self {
        Self {
            state: phase.state,
            instruction_key: phase.state.instruction_key().to_string(),
            duration_seconds: phase.duration_seconds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionStepResponse {
    pub text_key: String,
    pub diagram_hint: String,
}

impl From<&InstructionStep> for InstructionStepResponse {
    fn from(step: &InstructionStep) -> Self {
        Self {
            text_key: step.text_key.clone(),
            diagram_hint: step.diagram_hint.clone(),
        }
    }
}

/// Catalog card for an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSummaryResponse {
    pub slug: String,
    pub name_key: String,
    pub description_key: String,
    pub duration_minutes: u32,
    pub cycle_seconds: u32,
    pub total_cycles: u32,
}

impl From<&Exercise> for ExerciseSummaryResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            slug: exercise.slug().to_string(),
            name_key: exercise.name_key().to_string(),
            description_key: exercise.description_key().to_string(),
            duration_minutes: exercise.duration_minutes(),
            cycle_seconds: exercise.cycle().cycle_seconds(),
            total_cycles: exercise.total_cycles(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseListResponse {
    pub exercises: Vec<ExerciseSummaryResponse>,
}

/// Full exercise page: summary plus cycle and instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDetailResponse {
    #[serde(flatten)]
    pub summary: ExerciseSummaryResponse,
    pub phases: Vec<PhaseResponse>,
    pub instruction_steps: Vec<InstructionStepResponse>,
}

impl From<&Exercise> for ExerciseDetailResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            summary: ExerciseSummaryResponse::from(exercise),
            phases: exercise.cycle().phases().iter().map(PhaseResponse::from).collect(),
            instruction_steps: exercise
                .instruction_steps()
                .iter()
                .map(InstructionStepResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::breathing::BUILTIN_EXERCISES;

    fn box_breathing() -> &'static Exercise {
        &BUILTIN_EXERCISES[0]
    }

    #[test]
    fn summary_includes_cycle_arithmetic() {
        let summary = ExerciseSummaryResponse::from(box_breathing());
        assert_eq!(summary.slug, "box-breathing");
        assert_eq!(summary.cycle_seconds, 16);
        assert_eq!(summary.total_cycles, 18);
    }

    #[test]
    fn detail_flattens_summary_and_lists_phases() {
        let detail = ExerciseDetailResponse::from(box_breathing());
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["slug"], "box-breathing");
        assert_eq!(json["phases"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["phases"][1]["instruction_key"], "hold");
        assert_eq!(json["instruction_steps"].as_array().map(Vec::len), Some(5));
    }
}
