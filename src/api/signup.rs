//! Sign-up API Endpoint
//!
//! Validates the sign-up form against the mock existing users. No
//! account is actually created; a clean form just gets a success
//! acknowledgement.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::models::signup::SignUpRequest;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/signup", post(sign_up))
}

async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let today = state.clock.now().date_naive();
    let errors = request.validate(&state.store.existing_users, today);

    if !errors.is_empty() {
        return Err(AppError::SignUpRejected(errors));
    }

    tracing::info!(username = %request.username, "Sign-up accepted");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "created",
            "username": request.username.trim()
        })),
    ))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::test_router;
    use axum_test::TestServer;
    use serde_json::json;

    fn valid_form() -> serde_json::Value {
        json!({
            "email": "new@example.com",
            "phone": "+15551234567",
            "username": "new_lifter",
            "display_name": "New Lifter",
            "password": "hunter2hunter2",
            "confirm_password": "hunter2hunter2",
            "birthday": "2000-06-01"
        })
    }

    #[tokio::test]
    async fn test_valid_sign_up() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let response = server.post("/api/signup").json(&valid_form()).await;
        assert_eq!(response.status_code(), 201);

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "created");
        assert_eq!(body["username"], "new_lifter");
    }

    #[tokio::test]
    async fn test_taken_email_is_rejected() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let mut form = valid_form();
        form["email"] = json!("john@example.com");

        let response = server.post("/api/signup").json(&form).await;
        assert_eq!(response.status_code(), 400);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "SignUpRejected");
        let errors = body["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e["field"] == "email"));
    }

    #[tokio::test]
    async fn test_underage_is_rejected() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        // Manual clock pins today to 2026-03-14
        let mut form = valid_form();
        form["birthday"] = json!("2015-01-01");

        let response = server.post("/api/signup").json(&form).await;
        assert_eq!(response.status_code(), 400);

        let body: serde_json::Value = response.json();
        let errors = body["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e["field"] == "birthday"));
    }

    #[tokio::test]
    async fn test_all_failures_are_collected() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let form = json!({
            "email": "",
            "phone": "",
            "username": "",
            "display_name": "",
            "password": "",
            "confirm_password": "",
            "birthday": null
        });

        let response = server.post("/api/signup").json(&form).await;
        assert_eq!(response.status_code(), 400);

        let body: serde_json::Value = response.json();
        assert!(body["errors"].as_array().unwrap().len() >= 6);
    }
}
