//! Workout Service
//!
//! Holds every workout session in progress and routes the builder's
//! edit operations to the right one. Finishing a session removes it
//! and hands back its summary; nothing outlives the process.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::mock::MockStore;
use crate::models::workout::{SetField, WorkoutError, WorkoutSession, WorkoutSummary};
use crate::services::clock::Clock;

/// Service managing in-progress workout sessions
#[derive(Clone)]
pub struct WorkoutService {
    sessions: Arc<RwLock<HashMap<Uuid, WorkoutSession>>>,
    store: Arc<MockStore>,
    clock: Arc<dyn Clock>,
}

/// Session view for API responses, the session plus its running clock
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub session: WorkoutSession,
    pub elapsed_seconds: i64,
    pub elapsed_display: String,
    pub total_sets: usize,
    pub completed_sets: usize,
    pub total_weight: f64,
}

impl WorkoutService {
    pub fn new(store: Arc<MockStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            store,
            clock,
        }
    }

    /// Start a session, blank or seeded from a template
    pub async fn start_session(
        &self,
        name: Option<String>,
        template_id: Option<String>,
    ) -> Result<SessionView, WorkoutServiceError> {
        let started_at = self.clock.now();

        let session = match template_id {
            Some(template_id) => {
                let template = self
                    .store
                    .template(&template_id)
                    .ok_or(WorkoutServiceError::UnknownTemplate(template_id))?;
                WorkoutSession::from_template(template, &self.store.exercises, started_at)?
            }
            None => {
                let name = name.unwrap_or_else(|| "Workout".to_string());
                WorkoutSession::new(&name, started_at)
            }
        };

        tracing::info!(session_id = %session.id, name = %session.name, "Workout session started");

        let view = self.view(&session);
        self.sessions.write().await.insert(session.id, session);
        Ok(view)
    }

    /// Get a session snapshot
    pub async fn get_session(&self, session_id: Uuid) -> Result<SessionView, WorkoutServiceError> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(&session_id)
            .ok_or(WorkoutServiceError::SessionNotFound(session_id))?;
        Ok(self.view(session))
    }

    /// Abandon a session without a summary
    pub async fn discard_session(&self, session_id: Uuid) -> Result<(), WorkoutServiceError> {
        let removed = self.sessions.write().await.remove(&session_id);

        match removed {
            Some(session) => {
                tracing::info!(session_id = %session.id, "Workout session discarded");
                Ok(())
            }
            None => Err(WorkoutServiceError::SessionNotFound(session_id)),
        }
    }

    /// Add an exercise from the catalog to a session
    pub async fn add_exercise(
        &self,
        session_id: Uuid,
        exercise_id: &str,
    ) -> Result<SessionView, WorkoutServiceError> {
        let exercise = self
            .store
            .exercise(exercise_id)
            .cloned()
            .ok_or_else(|| WorkoutServiceError::UnknownExercise(exercise_id.to_string()))?;

        self.with_session(session_id, |session| {
            session.add_exercise(exercise);
            Ok(())
        })
        .await
    }

    pub async fn remove_exercise(
        &self,
        session_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<SessionView, WorkoutServiceError> {
        self.with_session(session_id, |session| session.remove_exercise(exercise_id))
            .await
    }

    pub async fn add_set(
        &self,
        session_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<SessionView, WorkoutServiceError> {
        self.with_session(session_id, |session| {
            session.add_set(exercise_id)?;
            Ok(())
        })
        .await
    }

    pub async fn remove_set(
        &self,
        session_id: Uuid,
        exercise_id: Uuid,
        set_id: Uuid,
    ) -> Result<SessionView, WorkoutServiceError> {
        self.with_session(session_id, |session| session.remove_set(exercise_id, set_id))
            .await
    }

    pub async fn update_set(
        &self,
        session_id: Uuid,
        exercise_id: Uuid,
        set_id: Uuid,
        field: SetField,
        value: &str,
    ) -> Result<SessionView, WorkoutServiceError> {
        self.with_session(session_id, |session| {
            session.update_set(exercise_id, set_id, field, value)
        })
        .await
    }

    pub async fn toggle_set_complete(
        &self,
        session_id: Uuid,
        exercise_id: Uuid,
        set_id: Uuid,
    ) -> Result<SessionView, WorkoutServiceError> {
        self.with_session(session_id, |session| {
            session.toggle_set_complete(exercise_id, set_id)?;
            Ok(())
        })
        .await
    }

    /// Finish a session: remove it and return the completion stats
    pub async fn finish_session(
        &self,
        session_id: Uuid,
    ) -> Result<WorkoutSummary, WorkoutServiceError> {
        let session = self
            .sessions
            .write()
            .await
            .remove(&session_id)
            .ok_or(WorkoutServiceError::SessionNotFound(session_id))?;

        let summary = session.summary(self.clock.now());

        tracing::info!(
            session_id = %session.id,
            duration = %summary.duration,
            completed_sets = summary.completed_sets,
            "Workout session finished"
        );

        Ok(summary)
    }

    /// Run an edit against a session and return its updated snapshot
    async fn with_session<F>(
        &self,
        session_id: Uuid,
        edit: F,
    ) -> Result<SessionView, WorkoutServiceError>
    where
        F: FnOnce(&mut WorkoutSession) -> Result<(), WorkoutError>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(WorkoutServiceError::SessionNotFound(session_id))?;

        edit(session)?;
        Ok(self.view(session))
    }

    fn view(&self, session: &WorkoutSession) -> SessionView {
        let now = self.clock.now();
        SessionView {
            elapsed_seconds: session.elapsed_seconds(now),
            elapsed_display: session.elapsed_display(now),
            total_sets: session.total_sets(),
            completed_sets: session.completed_sets(),
            total_weight: session.total_weight(),
            session: session.clone(),
        }
    }
}

/// Workout service errors
#[derive(Debug, thiserror::Error)]
pub enum WorkoutServiceError {
    #[error("Workout session {0} not found")]
    SessionNotFound(Uuid),

    #[error("Template '{0}' not found")]
    UnknownTemplate(String),

    #[error("Exercise '{0}' is not in the catalog")]
    UnknownExercise(String),

    #[error(transparent)]
    Workout(#[from] WorkoutError),
}
