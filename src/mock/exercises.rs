//! Seeded exercise catalog

use crate::models::exercise::{Category, Exercise, ExerciseKind};

/// The full exercise database the builder searches
pub fn exercise_catalog() -> Vec<Exercise> {
    use Category::*;
    use ExerciseKind::{Cardio as CardioKind, Strength};

    vec![
        // Chest
        Exercise::new("bench-press", "Bench Press", Chest, Strength),
        Exercise::new("incline-bench", "Incline Bench Press", Chest, Strength),
        Exercise::new("dumbbell-press", "Dumbbell Press", Chest, Strength),
        Exercise::new("cable-fly", "Cable Fly", Chest, Strength),
        Exercise::new("push-ups", "Push Ups", Chest, Strength),
        // Back
        Exercise::new("deadlift", "Deadlift", Back, Strength),
        Exercise::new("pull-ups", "Pull Ups", Back, Strength),
        Exercise::new("barbell-row", "Barbell Row", Back, Strength),
        Exercise::new("lat-pulldown", "Lat Pulldown", Back, Strength),
        Exercise::new("cable-row", "Cable Row", Back, Strength),
        // Legs
        Exercise::new("squat", "Squat", Legs, Strength),
        Exercise::new("leg-press", "Leg Press", Legs, Strength),
        Exercise::new("leg-curl", "Leg Curl", Legs, Strength),
        Exercise::new("leg-extension", "Leg Extension", Legs, Strength),
        Exercise::new("lunges", "Lunges", Legs, Strength),
        Exercise::new("calf-raise", "Calf Raise", Legs, Strength),
        // Shoulders
        Exercise::new("shoulder-press", "Shoulder Press", Shoulders, Strength),
        Exercise::new("lateral-raise", "Lateral Raise", Shoulders, Strength),
        Exercise::new("front-raise", "Front Raise", Shoulders, Strength),
        Exercise::new("rear-delt-fly", "Rear Delt Fly", Shoulders, Strength),
        // Arms
        Exercise::new("bicep-curl", "Bicep Curl", Arms, Strength),
        Exercise::new("dumbbell-curl", "Dumbbell Curl", Arms, Strength),
        Exercise::new("hammer-curl", "Hammer Curl", Arms, Strength),
        Exercise::new("tricep-extension", "Tricep Extension", Arms, Strength),
        Exercise::new("tricep-dips", "Tricep Dips", Arms, Strength),
        Exercise::new("skull-crushers", "Skull Crushers", Arms, Strength),
        // Cardio
        Exercise::new("running", "Running", Cardio, CardioKind),
        Exercise::new("treadmill", "Treadmill", Cardio, CardioKind),
        Exercise::new("incline-walk", "Incline Walk", Cardio, CardioKind),
        Exercise::new("cycling", "Cycling", Cardio, CardioKind),
        Exercise::new("rowing", "Rowing", Cardio, CardioKind),
        Exercise::new("stairmaster", "Stairmaster", Cardio, CardioKind),
        Exercise::new("elliptical", "Elliptical", Cardio, CardioKind),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = exercise_catalog();
        let mut ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_cardio_entries_have_cardio_kind() {
        for exercise in exercise_catalog() {
            if exercise.category == Category::Cardio {
                assert_eq!(exercise.kind, ExerciseKind::Cardio, "{}", exercise.id);
            } else {
                assert_eq!(exercise.kind, ExerciseKind::Strength, "{}", exercise.id);
            }
        }
    }
}
