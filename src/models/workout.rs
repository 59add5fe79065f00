//! Workout Session Model
//!
//! The in-memory state for one workout in progress: an ordered list of
//! exercises, each with an ordered list of sets, plus the derived stats
//! the completion screen reads. Sessions are created blank or seeded
//! from a template and discarded after finishing; nothing persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::exercise::{Exercise, ExerciseKind};
use crate::models::template::WorkoutTemplate;

/// One unit of exercise performance. Strength sets fill reps/weight,
/// cardio sets fill distance/time; all fields stay `None` until the
/// user enters them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub id: Uuid,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
    /// Miles
    pub distance: Option<f64>,
    /// MM:SS as typed
    pub time: Option<String>,
    pub completed: bool,
}

impl WorkoutSet {
    /// A blank set with nothing filled in
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            reps: None,
            weight: None,
            distance: None,
            time: None,
            completed: false,
        }
    }

    /// Last-value-carry: copy the previous set's values for faster data
    /// entry, with completion cleared
    pub fn carried_from(previous: &WorkoutSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            reps: previous.reps,
            weight: previous.weight,
            distance: previous.distance,
            time: previous.time.clone(),
            completed: false,
        }
    }

    pub fn with_defaults(reps: Option<u32>, weight: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            reps,
            weight,
            distance: None,
            time: None,
            completed: false,
        }
    }
}

/// Editable fields of a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetField {
    Reps,
    Weight,
    Distance,
    Time,
}

/// A chosen exercise plus its sets for this session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: Uuid,
    pub exercise: Exercise,
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutExercise {
    /// New exercise starts with a single blank set
    pub fn new(exercise: Exercise) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise,
            sets: vec![WorkoutSet::empty()],
        }
    }

    /// Seed from a template's default sets
    pub fn with_sets(exercise: Exercise, sets: Vec<WorkoutSet>) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise,
            sets,
        }
    }

    pub fn total_sets(&self) -> usize {
        self.sets.len()
    }

    pub fn completed_sets(&self) -> usize {
        self.sets.iter().filter(|s| s.completed).count()
    }
}

/// Summary stats read by the completion screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub name: String,
    pub exercises: usize,
    pub total_sets: usize,
    pub completed_sets: usize,
    /// Pounds summed over completed strength sets
    pub total_weight: f64,
    /// M:SS display form
    pub duration: String,
    pub duration_seconds: i64,
}

/// A workout in progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub name: String,
    pub exercises: Vec<WorkoutExercise>,
    /// Captured once at creation; elapsed time is now minus this
    pub started_at: DateTime<Utc>,
}

impl WorkoutSession {
    /// Start a blank session
    pub fn new(name: &str, started_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            exercises: Vec::new(),
            started_at,
        }
    }

    /// Seed a session from a template, resolving each entry against the
    /// exercise catalog
    pub fn from_template(
        template: &WorkoutTemplate,
        catalog: &[Exercise],
        started_at: DateTime<Utc>,
    ) -> Result<Self, WorkoutError> {
        let mut session = Self::new(&template.name, started_at);

        for entry in &template.exercises {
            let exercise = catalog
                .iter()
                .find(|e| e.id == entry.exercise_id)
                .cloned()
                .ok_or_else(|| WorkoutError::UnknownExercise(entry.exercise_id.clone()))?;

            let sets = entry
                .sets
                .iter()
                .map(|s| WorkoutSet::with_defaults(s.reps, s.weight))
                .collect();

            session.exercises.push(WorkoutExercise::with_sets(exercise, sets));
        }

        Ok(session)
    }

    /// Append an exercise with one blank set
    pub fn add_exercise(&mut self, exercise: Exercise) -> Uuid {
        let workout_exercise = WorkoutExercise::new(exercise);
        let id = workout_exercise.id;
        self.exercises.push(workout_exercise);
        id
    }

    /// Remove an exercise and all its sets
    pub fn remove_exercise(&mut self, exercise_id: Uuid) -> Result<(), WorkoutError> {
        let before = self.exercises.len();
        self.exercises.retain(|e| e.id != exercise_id);

        if self.exercises.len() == before {
            return Err(WorkoutError::ExerciseNotFound(exercise_id));
        }
        Ok(())
    }

    /// Add a set, carrying the previous set's values
    pub fn add_set(&mut self, exercise_id: Uuid) -> Result<Uuid, WorkoutError> {
        let exercise = self.exercise_mut(exercise_id)?;

        let new_set = match exercise.sets.last() {
            Some(last) => WorkoutSet::carried_from(last),
            None => WorkoutSet::empty(),
        };
        let id = new_set.id;
        exercise.sets.push(new_set);
        Ok(id)
    }

    /// Remove a set. Every exercise keeps at least one set; dropping to
    /// zero rows happens only by removing the exercise itself.
    pub fn remove_set(&mut self, exercise_id: Uuid, set_id: Uuid) -> Result<(), WorkoutError> {
        let exercise = self.exercise_mut(exercise_id)?;

        if exercise.sets.len() == 1 {
            return Err(WorkoutError::LastSet);
        }

        let before = exercise.sets.len();
        exercise.sets.retain(|s| s.id != set_id);

        if exercise.sets.len() == before {
            return Err(WorkoutError::SetNotFound(set_id));
        }
        Ok(())
    }

    /// Update one field of a set from raw user input. Unparseable
    /// numeric input silently clears the field rather than failing.
    pub fn update_set(
        &mut self,
        exercise_id: Uuid,
        set_id: Uuid,
        field: SetField,
        value: &str,
    ) -> Result<(), WorkoutError> {
        let set = self.set_mut(exercise_id, set_id)?;
        let value = value.trim();

        match field {
            SetField::Reps => set.reps = value.parse().ok(),
            SetField::Weight => set.weight = value.parse().ok(),
            SetField::Distance => set.distance = value.parse().ok(),
            SetField::Time => {
                set.time = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
        }
        Ok(())
    }

    /// Flip a set's completed flag
    pub fn toggle_set_complete(&mut self, exercise_id: Uuid, set_id: Uuid) -> Result<bool, WorkoutError> {
        let set = self.set_mut(exercise_id, set_id)?;
        set.completed = !set.completed;
        Ok(set.completed)
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(WorkoutExercise::total_sets).sum()
    }

    pub fn completed_sets(&self) -> usize {
        self.exercises.iter().map(WorkoutExercise::completed_sets).sum()
    }

    /// Pounds summed over completed strength sets
    pub fn total_weight(&self) -> f64 {
        self.exercises
            .iter()
            .filter(|e| e.exercise.kind == ExerciseKind::Strength)
            .flat_map(|e| e.sets.iter())
            .filter(|s| s.completed)
            .filter_map(|s| s.weight)
            .sum()
    }

    /// Whole seconds since the session started
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_seconds().max(0)
    }

    /// Elapsed time in the M:SS form the builder header shows
    pub fn elapsed_display(&self, now: DateTime<Utc>) -> String {
        let elapsed = self.elapsed_seconds(now);
        format!("{}:{:02}", elapsed / 60, elapsed % 60)
    }

    /// Stats for the completion screen
    pub fn summary(&self, now: DateTime<Utc>) -> WorkoutSummary {
        WorkoutSummary {
            name: self.name.clone(),
            exercises: self.exercises.len(),
            total_sets: self.total_sets(),
            completed_sets: self.completed_sets(),
            total_weight: self.total_weight(),
            duration: self.elapsed_display(now),
            duration_seconds: self.elapsed_seconds(now),
        }
    }

    fn exercise_mut(&mut self, exercise_id: Uuid) -> Result<&mut WorkoutExercise, WorkoutError> {
        self.exercises
            .iter_mut()
            .find(|e| e.id == exercise_id)
            .ok_or(WorkoutError::ExerciseNotFound(exercise_id))
    }

    fn set_mut(&mut self, exercise_id: Uuid, set_id: Uuid) -> Result<&mut WorkoutSet, WorkoutError> {
        self.exercise_mut(exercise_id)?
            .sets
            .iter_mut()
            .find(|s| s.id == set_id)
            .ok_or(WorkoutError::SetNotFound(set_id))
    }
}

/// Workout session errors
#[derive(Debug, thiserror::Error)]
pub enum WorkoutError {
    #[error("Exercise {0} is not in this workout")]
    ExerciseNotFound(Uuid),

    #[error("Set {0} is not in this exercise")]
    SetNotFound(Uuid),

    #[error("An exercise must keep at least one set; remove the exercise instead")]
    LastSet,

    #[error("Exercise '{0}' is not in the catalog")]
    UnknownExercise(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exercise::Category;
    use chrono::TimeZone;

    fn bench_press() -> Exercise {
        Exercise::new("bench-press", "Bench Press", Category::Chest, ExerciseKind::Strength)
    }

    fn running() -> Exercise {
        Exercise::new("running", "Running", Category::Cardio, ExerciseKind::Cardio)
    }

    fn session() -> WorkoutSession {
        let start = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).single().unwrap();
        WorkoutSession::new("Workout", start)
    }

    #[test]
    fn test_new_exercise_starts_with_one_blank_set() {
        let mut session = session();
        session.add_exercise(bench_press());

        let exercise = &session.exercises[0];
        assert_eq!(exercise.total_sets(), 1);
        assert_eq!(exercise.completed_sets(), 0);
        assert!(exercise.sets[0].reps.is_none());
        assert!(exercise.sets[0].weight.is_none());
    }

    #[test]
    fn test_add_set_carries_previous_values() {
        let mut session = session();
        let exercise_id = session.add_exercise(bench_press());
        let first_set = session.exercises[0].sets[0].id;

        session.update_set(exercise_id, first_set, SetField::Reps, "10").unwrap();
        session.update_set(exercise_id, first_set, SetField::Weight, "185").unwrap();
        session.toggle_set_complete(exercise_id, first_set).unwrap();

        session.add_set(exercise_id).unwrap();

        let new_set = &session.exercises[0].sets[1];
        assert_eq!(new_set.reps, Some(10));
        assert_eq!(new_set.weight, Some(185.0));
        assert!(!new_set.completed, "carried set must not copy completion");
    }

    #[test]
    fn test_add_set_carries_cardio_values() {
        let mut session = session();
        let exercise_id = session.add_exercise(running());
        let first_set = session.exercises[0].sets[0].id;

        session.update_set(exercise_id, first_set, SetField::Distance, "3.1").unwrap();
        session.update_set(exercise_id, first_set, SetField::Time, "28:30").unwrap();

        session.add_set(exercise_id).unwrap();

        let new_set = &session.exercises[0].sets[1];
        assert_eq!(new_set.distance, Some(3.1));
        assert_eq!(new_set.time.as_deref(), Some("28:30"));
    }

    #[test]
    fn test_remove_last_set_is_rejected() {
        let mut session = session();
        let exercise_id = session.add_exercise(bench_press());
        let set_id = session.exercises[0].sets[0].id;

        let result = session.remove_set(exercise_id, set_id);
        assert!(matches!(result, Err(WorkoutError::LastSet)));
        assert_eq!(session.exercises[0].total_sets(), 1);
    }

    #[test]
    fn test_remove_set_with_multiple_sets() {
        let mut session = session();
        let exercise_id = session.add_exercise(bench_press());
        let second = session.add_set(exercise_id).unwrap();

        session.remove_set(exercise_id, second).unwrap();
        assert_eq!(session.exercises[0].total_sets(), 1);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut session = session();
        let exercise_id = session.add_exercise(bench_press());
        let set_id = session.exercises[0].sets[0].id;

        assert!(session.toggle_set_complete(exercise_id, set_id).unwrap());
        assert!(!session.toggle_set_complete(exercise_id, set_id).unwrap());
        assert!(!session.exercises[0].sets[0].completed);
    }

    #[test]
    fn test_non_numeric_input_clears_field() {
        let mut session = session();
        let exercise_id = session.add_exercise(bench_press());
        let set_id = session.exercises[0].sets[0].id;

        session.update_set(exercise_id, set_id, SetField::Reps, "10").unwrap();
        assert_eq!(session.exercises[0].sets[0].reps, Some(10));

        session.update_set(exercise_id, set_id, SetField::Reps, "ten").unwrap();
        assert_eq!(session.exercises[0].sets[0].reps, None);

        session.update_set(exercise_id, set_id, SetField::Weight, "").unwrap();
        assert_eq!(session.exercises[0].sets[0].weight, None);
    }

    #[test]
    fn test_completed_never_exceeds_total() {
        let mut session = session();
        let exercise_id = session.add_exercise(bench_press());
        session.add_set(exercise_id).unwrap();
        session.add_set(exercise_id).unwrap();

        let set_id = session.exercises[0].sets[0].id;
        session.toggle_set_complete(exercise_id, set_id).unwrap();

        let exercise = &session.exercises[0];
        assert_eq!(exercise.total_sets(), exercise.sets.len());
        assert!(exercise.completed_sets() <= exercise.total_sets());
    }

    #[test]
    fn test_remove_exercise() {
        let mut session = session();
        let first = session.add_exercise(bench_press());
        session.add_exercise(running());

        session.remove_exercise(first).unwrap();
        assert_eq!(session.exercises.len(), 1);
        assert_eq!(session.exercises[0].exercise.id, "running");

        let result = session.remove_exercise(first);
        assert!(matches!(result, Err(WorkoutError::ExerciseNotFound(_))));
    }

    #[test]
    fn test_total_weight_counts_completed_strength_sets_only() {
        let mut session = session();
        let strength = session.add_exercise(bench_press());
        let cardio = session.add_exercise(running());

        let strength_set = session.exercises[0].sets[0].id;
        session.update_set(strength, strength_set, SetField::Weight, "185").unwrap();
        session.toggle_set_complete(strength, strength_set).unwrap();

        let second = session.add_set(strength).unwrap();
        session.update_set(strength, second, SetField::Weight, "205").unwrap();
        // second set left incomplete

        let cardio_set = session.exercises[1].sets[0].id;
        session.update_set(cardio, cardio_set, SetField::Distance, "2.0").unwrap();
        session.toggle_set_complete(cardio, cardio_set).unwrap();

        assert_eq!(session.total_weight(), 185.0);
    }

    #[test]
    fn test_elapsed_display() {
        let session = session();
        let now = session.started_at + chrono::Duration::seconds(754);

        assert_eq!(session.elapsed_seconds(now), 754);
        assert_eq!(session.elapsed_display(now), "12:34");

        let early = session.started_at + chrono::Duration::seconds(5);
        assert_eq!(session.elapsed_display(early), "0:05");
    }

    #[test]
    fn test_summary() {
        let mut session = session();
        let exercise_id = session.add_exercise(bench_press());
        let set_id = session.exercises[0].sets[0].id;
        session.update_set(exercise_id, set_id, SetField::Weight, "135").unwrap();
        session.toggle_set_complete(exercise_id, set_id).unwrap();
        session.add_set(exercise_id).unwrap();

        let now = session.started_at + chrono::Duration::minutes(45);
        let summary = session.summary(now);

        assert_eq!(summary.exercises, 1);
        assert_eq!(summary.total_sets, 2);
        assert_eq!(summary.completed_sets, 1);
        assert_eq!(summary.total_weight, 135.0);
        assert_eq!(summary.duration, "45:00");
        assert_eq!(summary.duration_seconds, 45 * 60);
    }
}
