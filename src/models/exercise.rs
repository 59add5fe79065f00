//! Exercise Reference Data
//!
//! Immutable catalog entries the workout builder picks from. Catalog
//! contents are seeded once at startup and never mutated.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How an exercise is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExerciseKind {
    Strength,
    Cardio,
}

/// Muscle-group style grouping tag for the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Category {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Cardio,
    Core,
}

/// A single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Stable slug identifier, e.g. `bench-press`
    pub id: String,

    /// Display name
    pub name: String,

    /// Grouping tag
    pub category: Category,

    /// Strength or cardio
    pub kind: ExerciseKind,
}

impl Exercise {
    pub fn new(id: &str, name: &str, category: Category, kind: ExerciseKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            kind,
        }
    }

    /// Case-insensitive match against name or category, used by the
    /// builder's search box
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.category.to_string().to_lowercase().contains(&query)
    }
}
