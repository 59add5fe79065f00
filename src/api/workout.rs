//! Workout Builder API Endpoints
//!
//! Exercise catalog search, template listing, and the session
//! lifecycle: start, edit exercises and sets, finish or discard.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::AppState;
use crate::error::AppResult;
use crate::models::exercise::Exercise;
use crate::models::template::TemplateSummary;
use crate::models::workout::{SetField, WorkoutSummary};
use crate::services::SessionView;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/exercises", get(list_exercises))
        .route("/api/templates", get(list_templates))
        .route("/api/workouts", post(start_workout))
        .route("/api/workouts/:id", get(get_workout).delete(discard_workout))
        .route("/api/workouts/:id/finish", post(finish_workout))
        .route("/api/workouts/:id/exercises", post(add_exercise))
        .route(
            "/api/workouts/:id/exercises/:exercise_id",
            delete(remove_exercise),
        )
        .route("/api/workouts/:id/exercises/:exercise_id/sets", post(add_set))
        .route(
            "/api/workouts/:id/exercises/:exercise_id/sets/:set_id",
            post(update_set).delete(remove_set),
        )
        .route(
            "/api/workouts/:id/exercises/:exercise_id/sets/:set_id/toggle",
            post(toggle_set),
        )
}

#[derive(Debug, Deserialize)]
struct ExerciseQuery {
    #[serde(default)]
    search: String,
}

/// Catalog entries matching the search box
async fn list_exercises(
    State(state): State<AppState>,
    Query(query): Query<ExerciseQuery>,
) -> Json<Vec<Exercise>> {
    let matches = state
        .store
        .search_exercises(&query.search)
        .into_iter()
        .cloned()
        .collect();
    Json(matches)
}

/// Templates for the picker, summarized
async fn list_templates(State(state): State<AppState>) -> Json<Vec<TemplateSummary>> {
    Json(state.store.templates.iter().map(TemplateSummary::from).collect())
}

#[derive(Debug, Deserialize)]
struct StartWorkoutRequest {
    name: Option<String>,
    template_id: Option<String>,
}

/// Start a session, blank or from a template
async fn start_workout(
    State(state): State<AppState>,
    Json(request): Json<StartWorkoutRequest>,
) -> AppResult<(StatusCode, Json<SessionView>)> {
    let view = state
        .workouts
        .start_session(request.name, request.template_id)
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SessionView>> {
    Ok(Json(state.workouts.get_session(id).await?))
}

async fn discard_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.workouts.discard_session(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn finish_workout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<WorkoutSummary>> {
    Ok(Json(state.workouts.finish_session(id).await?))
}

#[derive(Debug, Deserialize)]
struct AddExerciseRequest {
    exercise_id: String,
}

async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddExerciseRequest>,
) -> AppResult<Json<SessionView>> {
    Ok(Json(
        state.workouts.add_exercise(id, &request.exercise_id).await?,
    ))
}

async fn remove_exercise(
    State(state): State<AppState>,
    Path((id, exercise_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<SessionView>> {
    Ok(Json(state.workouts.remove_exercise(id, exercise_id).await?))
}

async fn add_set(
    State(state): State<AppState>,
    Path((id, exercise_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<SessionView>> {
    Ok(Json(state.workouts.add_set(id, exercise_id).await?))
}

async fn remove_set(
    State(state): State<AppState>,
    Path((id, exercise_id, set_id)): Path<(Uuid, Uuid, Uuid)>,
) -> AppResult<Json<SessionView>> {
    Ok(Json(
        state.workouts.remove_set(id, exercise_id, set_id).await?,
    ))
}

#[derive(Debug, Deserialize)]
struct UpdateSetRequest {
    field: SetField,
    value: String,
}

/// Set one field from raw input; non-numeric values clear the field
async fn update_set(
    State(state): State<AppState>,
    Path((id, exercise_id, set_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(request): Json<UpdateSetRequest>,
) -> AppResult<Json<SessionView>> {
    Ok(Json(
        state
            .workouts
            .update_set(id, exercise_id, set_id, request.field, &request.value)
            .await?,
    ))
}

async fn toggle_set(
    State(state): State<AppState>,
    Path((id, exercise_id, set_id)): Path<(Uuid, Uuid, Uuid)>,
) -> AppResult<Json<SessionView>> {
    Ok(Json(
        state
            .workouts
            .toggle_set_complete(id, exercise_id, set_id)
            .await?,
    ))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::test_router;
    use axum_test::TestServer;
    use serde_json::json;

    #[tokio::test]
    async fn test_exercise_search() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/exercises").await;
        assert_eq!(response.status_code(), 200);
        let all: serde_json::Value = response.json();
        assert_eq!(all.as_array().unwrap().len(), 33);

        let response = server.get("/api/exercises").add_query_param("search", "bench").await;
        let matches: serde_json::Value = response.json();
        assert!(matches
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["id"] == "bench-press"));
    }

    #[tokio::test]
    async fn test_template_listing() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/templates").await;
        assert_eq!(response.status_code(), 200);

        let templates: serde_json::Value = response.json();
        let templates = templates.as_array().unwrap();
        assert_eq!(templates.len(), 4);
        assert_eq!(templates[0]["name"], "Push Day");
        assert_eq!(templates[0]["exercises"], 4);
    }

    #[tokio::test]
    async fn test_start_blank_workout() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let response = server.post("/api/workouts").json(&json!({})).await;
        assert_eq!(response.status_code(), 201);

        let body: serde_json::Value = response.json();
        assert_eq!(body["name"], "Workout");
        assert_eq!(body["elapsed_display"], "0:00");
        assert!(body["exercises"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_start_from_unknown_template() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let response = server
            .post("/api/workouts")
            .json(&json!({"template_id": "99"}))
            .await;
        assert_eq!(response.status_code(), 404);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "TemplateNotFound");
    }

    #[tokio::test]
    async fn test_set_editing_flow() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let created: serde_json::Value = server
            .post("/api/workouts")
            .json(&json!({"name": "Morning Lift"}))
            .await
            .json();
        let workout = created["id"].as_str().unwrap().to_string();

        let body: serde_json::Value = server
            .post(&format!("/api/workouts/{workout}/exercises"))
            .json(&json!({"exercise_id": "squat"}))
            .await
            .json();
        let exercise = body["exercises"][0]["id"].as_str().unwrap().to_string();
        let set = body["exercises"][0]["sets"][0]["id"].as_str().unwrap().to_string();

        let body: serde_json::Value = server
            .post(&format!(
                "/api/workouts/{workout}/exercises/{exercise}/sets/{set}"
            ))
            .json(&json!({"field": "weight", "value": "225"}))
            .await
            .json();
        assert_eq!(body["exercises"][0]["sets"][0]["weight"], 225.0);

        let body: serde_json::Value = server
            .post(&format!(
                "/api/workouts/{workout}/exercises/{exercise}/sets/{set}/toggle"
            ))
            .await
            .json();
        assert_eq!(body["completed_sets"], 1);
        assert_eq!(body["total_weight"], 225.0);

        // Second set carries the first set's values
        let body: serde_json::Value = server
            .post(&format!("/api/workouts/{workout}/exercises/{exercise}/sets"))
            .await
            .json();
        assert_eq!(body["exercises"][0]["sets"][1]["weight"], 225.0);
        assert_eq!(body["exercises"][0]["sets"][1]["completed"], false);
    }

    #[tokio::test]
    async fn test_removing_only_set_conflicts() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let created: serde_json::Value =
            server.post("/api/workouts").json(&json!({})).await.json();
        let workout = created["id"].as_str().unwrap().to_string();

        let body: serde_json::Value = server
            .post(&format!("/api/workouts/{workout}/exercises"))
            .json(&json!({"exercise_id": "deadlift"}))
            .await
            .json();
        let exercise = body["exercises"][0]["id"].as_str().unwrap().to_string();
        let set = body["exercises"][0]["sets"][0]["id"].as_str().unwrap().to_string();

        let response = server
            .delete(&format!(
                "/api/workouts/{workout}/exercises/{exercise}/sets/{set}"
            ))
            .await;
        assert_eq!(response.status_code(), 409);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "LastSet");
    }

    #[tokio::test]
    async fn test_finish_reports_duration() {
        let (router, clock) = test_router();
        let server = TestServer::new(router).unwrap();

        let created: serde_json::Value = server
            .post("/api/workouts")
            .json(&json!({"template_id": "2"}))
            .await
            .json();
        let workout = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["name"], "Leg Day");

        clock.advance_minutes(52);
        clock.advance_seconds(7);

        let response = server.post(&format!("/api/workouts/{workout}/finish")).await;
        assert_eq!(response.status_code(), 200);

        let summary: serde_json::Value = response.json();
        assert_eq!(summary["duration"], "52:07");
        assert_eq!(summary["exercises"], 4);

        // Finished sessions are gone
        let response = server.get(&format!("/api/workouts/{workout}")).await;
        assert_eq!(response.status_code(), 404);
    }

    #[tokio::test]
    async fn test_discard_workout() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let created: serde_json::Value =
            server.post("/api/workouts").json(&json!({})).await.json();
        let workout = created["id"].as_str().unwrap().to_string();

        let response = server.delete(&format!("/api/workouts/{workout}")).await;
        assert_eq!(response.status_code(), 204);

        let response = server.delete(&format!("/api/workouts/{workout}")).await;
        assert_eq!(response.status_code(), 404);
    }
}
