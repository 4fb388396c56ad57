//! The built-in exercise catalog.

use once_cell::sync::Lazy;

use super::{Cycle, Exercise, ExerciseSlug, InstructionStep, Phase};

/// Exercises shipped with the application, in display order.
pub static BUILTIN_EXERCISES: Lazy<Vec<Exercise>> = Lazy::new(|| {
    vec![
        exercise(
            "box-breathing",
            "boxBreathing",
            5,
            &[
                ("boxBreathingStep1", "person sitting comfortably"),
                ("boxBreathingStep2", "lungs inhale diagram"),
                ("boxBreathingStep3", "holding breath diagram"),
                ("boxBreathingStep4", "lungs exhale diagram"),
                ("boxBreathingStep5", "holding breath empty diagram"),
            ],
            vec![
                Phase::inhale(4),
                Phase::hold_after_inhale(4),
                Phase::exhale(4),
                Phase::hold_after_exhale(4),
            ],
        ),
        exercise(
            "4-7-8-breathing",
            "fourSevenEightBreathing",
            3,
            &[
                ("fourSevenEightBreathingStep1", "person comfortable position tongue"),
                ("fourSevenEightBreathingStep2", "exhale whoosh sound"),
                ("fourSevenEightBreathingStep3", "inhale nose count four"),
                ("fourSevenEightBreathingStep4", "hold breath count seven"),
                ("fourSevenEightBreathingStep5", "exhale mouth count eight"),
            ],
            vec![Phase::inhale(4), Phase::hold_after_inhale(7), Phase::exhale(8)],
        ),
        exercise(
            "diaphragmatic-breathing",
            "diaphragmaticBreathing",
            7,
            &[
                ("diaphragmaticBreathingStep1", "person lying knees bent"),
                ("diaphragmaticBreathingStep2", "hands on chest belly"),
                ("diaphragmaticBreathingStep3", "inhale belly out"),
                ("diaphragmaticBreathingStep4", "exhale pursed lips belly in"),
            ],
            vec![Phase::inhale(4), Phase::exhale(6)],
        ),
        exercise(
            "alternate-nostril-breathing",
            "alternateNostrilBreathing",
            5,
            &[
                ("alternateNostrilBreathingStep1", "person meditative posture"),
                ("alternateNostrilBreathingStep2", "hand position nose"),
                ("alternateNostrilBreathingStep3", "inhale left nostril"),
                ("alternateNostrilBreathingStep4", "hold breath both nostrils closed"),
                ("alternateNostrilBreathingStep5", "exhale right nostril inhale right"),
                ("alternateNostrilBreathingStep6", "exhale left nostril"),
            ],
            vec![Phase::inhale(4), Phase::hold_after_inhale(2), Phase::exhale(4)],
        ),
        exercise(
            "pursed-lip-breathing",
            "pursedLipBreathing",
            4,
            &[
                ("pursedLipBreathingStep1", "person relaxed shoulders"),
                ("pursedLipBreathingStep2", "inhale nose count two"),
                ("pursedLipBreathingStep3", "pursed lips diagram"),
                ("pursedLipBreathingStep4", "exhale pursed lips count four"),
            ],
            vec![Phase::inhale(2), Phase::exhale(4)],
        ),
    ]
});

fn exercise(
    slug: &str,
    name_key: &str,
    duration_minutes: u32,
    steps: &[(&str, &str)],
    phases: Vec<Phase>,
) -> Exercise {
    let slug = ExerciseSlug::new(slug).expect("built-in slugs are well formed");
    let cycle = Cycle::new(phases).expect("built-in cycles are valid");
    let steps = steps
        .iter()
        .map(|(text_key, hint)| InstructionStep::new(*text_key, *hint))
        .collect();
    Exercise::new(
        slug,
        name_key,
        format!("{}Desc", name_key),
        duration_minutes,
        steps,
        cycle,
    )
    .expect("built-in exercises are valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::breathing::PhaseState;
    use std::collections::HashSet;

    fn find(slug: &str) -> &'static Exercise {
        BUILTIN_EXERCISES
            .iter()
            .find(|e| e.slug().as_str() == slug)
            .unwrap()
    }

    #[test]
    fn builtin_catalog_has_five_exercises_with_unique_slugs() {
        assert_eq!(BUILTIN_EXERCISES.len(), 5);
        let slugs: HashSet<_> = BUILTIN_EXERCISES.iter().map(|e| e.slug().clone()).collect();
        assert_eq!(slugs.len(), 5);
    }

    #[test]
    fn box_breathing_is_four_even_phases_for_five_minutes() {
        let exercise = find("box-breathing");
        let states: Vec<_> = exercise.cycle().phases().iter().map(|p| p.state).collect();
        assert_eq!(
            states,
            vec![
                PhaseState::Inhale,
                PhaseState::HoldAfterInhale,
                PhaseState::Exhale,
                PhaseState::HoldAfterExhale
            ]
        );
        assert_eq!(exercise.cycle().cycle_seconds(), 16);
        assert_eq!(exercise.total_cycles(), 18);
    }

    #[test]
    fn four_seven_eight_runs_three_minutes() {
        let exercise = find("4-7-8-breathing");
        assert_eq!(exercise.cycle().cycle_seconds(), 19);
        assert_eq!(exercise.total_cycles(), 9);
    }

    #[test]
    fn description_keys_follow_name_keys() {
        assert_eq!(find("pursed-lip-breathing").description_key(), "pursedLipBreathingDesc");
    }

    #[test]
    fn every_exercise_has_instructions() {
        assert!(BUILTIN_EXERCISES
            .iter()
            .all(|e| !e.instruction_steps().is_empty()));
    }
}
