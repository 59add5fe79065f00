//! Workout Template Model
//!
//! A named preset list of exercises with default set values, used to
//! seed a new workout session.

use serde::{Deserialize, Serialize};

/// Default values for one set within a template entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSet {
    pub reps: Option<u32>,
    pub weight: Option<f64>,
}

impl TemplateSet {
    pub fn new(reps: u32, weight: f64) -> Self {
        Self {
            reps: Some(reps),
            weight: Some(weight),
        }
    }
}

/// One exercise slot in a template, referencing the catalog by slug
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateExercise {
    pub exercise_id: String,
    pub sets: Vec<TemplateSet>,
}

impl TemplateExercise {
    pub fn new(exercise_id: &str, sets: Vec<TemplateSet>) -> Self {
        Self {
            exercise_id: exercise_id.to_string(),
            sets,
        }
    }
}

/// A reusable workout preset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display string, e.g. "1h 15m"
    pub estimated_time: String,
    /// Display string, e.g. "2 days ago"
    pub last_used: Option<String>,
    pub exercises: Vec<TemplateExercise>,
}

impl WorkoutTemplate {
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    /// Match against name or description, for the selector's search box
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// Listing form without the full set definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exercises: usize,
    pub estimated_time: String,
    pub last_used: Option<String>,
}

impl From<&WorkoutTemplate> for TemplateSummary {
    fn from(template: &WorkoutTemplate) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            exercises: template.exercise_count(),
            estimated_time: template.estimated_time.clone(),
            last_used: template.last_used.clone(),
        }
    }
}
