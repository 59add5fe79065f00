//! Seeded workout templates

use crate::models::template::{TemplateExercise, TemplateSet, WorkoutTemplate};

/// The preset templates the selector offers
pub fn workout_templates() -> Vec<WorkoutTemplate> {
    vec![
        WorkoutTemplate {
            id: "1".to_string(),
            name: "Push Day".to_string(),
            description: "Chest, shoulders, and triceps".to_string(),
            estimated_time: "1h 15m".to_string(),
            last_used: Some("2 days ago".to_string()),
            exercises: vec![
                TemplateExercise::new(
                    "bench-press",
                    vec![
                        TemplateSet::new(10, 185.0),
                        TemplateSet::new(8, 205.0),
                        TemplateSet::new(6, 225.0),
                    ],
                ),
                TemplateExercise::new(
                    "incline-bench",
                    vec![
                        TemplateSet::new(10, 135.0),
                        TemplateSet::new(10, 135.0),
                        TemplateSet::new(8, 155.0),
                    ],
                ),
                TemplateExercise::new(
                    "dumbbell-press",
                    vec![
                        TemplateSet::new(12, 70.0),
                        TemplateSet::new(12, 70.0),
                        TemplateSet::new(10, 75.0),
                    ],
                ),
                TemplateExercise::new(
                    "tricep-extension",
                    vec![
                        TemplateSet::new(15, 60.0),
                        TemplateSet::new(15, 60.0),
                        TemplateSet::new(12, 70.0),
                    ],
                ),
            ],
        },
        WorkoutTemplate {
            id: "2".to_string(),
            name: "Leg Day".to_string(),
            description: "Quads, hamstrings, and calves".to_string(),
            estimated_time: "1h 20m".to_string(),
            last_used: Some("4 days ago".to_string()),
            exercises: vec![
                TemplateExercise::new(
                    "squat",
                    vec![
                        TemplateSet::new(10, 225.0),
                        TemplateSet::new(8, 275.0),
                        TemplateSet::new(6, 315.0),
                    ],
                ),
                TemplateExercise::new(
                    "leg-press",
                    vec![
                        TemplateSet::new(12, 360.0),
                        TemplateSet::new(12, 360.0),
                        TemplateSet::new(10, 405.0),
                    ],
                ),
                TemplateExercise::new(
                    "leg-curl",
                    vec![
                        TemplateSet::new(12, 90.0),
                        TemplateSet::new(12, 90.0),
                        TemplateSet::new(10, 100.0),
                    ],
                ),
                TemplateExercise::new(
                    "calf-raise",
                    vec![
                        TemplateSet::new(15, 180.0),
                        TemplateSet::new(15, 180.0),
                        TemplateSet::new(15, 200.0),
                    ],
                ),
            ],
        },
        WorkoutTemplate {
            id: "3".to_string(),
            name: "Pull Day".to_string(),
            description: "Back and biceps".to_string(),
            estimated_time: "1h 25m".to_string(),
            last_used: Some("6 days ago".to_string()),
            exercises: vec![
                TemplateExercise::new(
                    "deadlift",
                    vec![
                        TemplateSet::new(8, 225.0),
                        TemplateSet::new(6, 275.0),
                        TemplateSet::new(4, 315.0),
                    ],
                ),
                TemplateExercise::new(
                    "pull-ups",
                    vec![
                        TemplateSet::new(10, 0.0),
                        TemplateSet::new(8, 0.0),
                        TemplateSet::new(6, 25.0),
                    ],
                ),
                TemplateExercise::new(
                    "barbell-row",
                    vec![
                        TemplateSet::new(10, 135.0),
                        TemplateSet::new(10, 155.0),
                        TemplateSet::new(8, 185.0),
                    ],
                ),
                TemplateExercise::new(
                    "bicep-curl",
                    vec![
                        TemplateSet::new(12, 30.0),
                        TemplateSet::new(12, 30.0),
                        TemplateSet::new(10, 35.0),
                    ],
                ),
            ],
        },
        WorkoutTemplate {
            id: "4".to_string(),
            name: "Upper Body".to_string(),
            description: "Full upper body workout".to_string(),
            estimated_time: "1h 30m".to_string(),
            last_used: Some("1 week ago".to_string()),
            exercises: vec![
                TemplateExercise::new(
                    "bench-press",
                    vec![TemplateSet::new(10, 185.0), TemplateSet::new(8, 205.0)],
                ),
                TemplateExercise::new(
                    "barbell-row",
                    vec![TemplateSet::new(10, 135.0), TemplateSet::new(10, 155.0)],
                ),
                TemplateExercise::new(
                    "shoulder-press",
                    vec![TemplateSet::new(10, 95.0), TemplateSet::new(8, 115.0)],
                ),
                TemplateExercise::new(
                    "dumbbell-curl",
                    vec![TemplateSet::new(12, 30.0), TemplateSet::new(10, 35.0)],
                ),
            ],
        },
    ]
}
