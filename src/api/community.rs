//! Community API Endpoints
//!
//! Gym map data, busy-level reports, the leaderboards, and groups
//! with their chat history.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::api::AppState;
use crate::error::AppResult;
use crate::models::group::{Group, Message};
use crate::models::gym::{BusyLevel, Gym};
use crate::models::leaderboard::{LeaderboardEntry, LeaderboardTab};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/gyms", get(list_gyms))
        .route("/api/gyms/:id/busy", post(report_busy))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/groups", get(list_groups).post(create_group))
        .route("/api/groups/join", post(join_group))
        .route(
            "/api/groups/:id/messages",
            get(get_messages).post(post_message),
        )
}

async fn list_gyms(State(state): State<AppState>) -> Json<Vec<Gym>> {
    Json(state.community.gyms().await)
}

#[derive(Debug, Deserialize)]
struct BusyReport {
    level: BusyLevel,
}

async fn report_busy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(report): Json<BusyReport>,
) -> AppResult<Json<Gym>> {
    Ok(Json(
        state.community.report_busy_level(&id, report.level).await?,
    ))
}

#[derive(Debug, Deserialize)]
struct LeaderboardQuery {
    #[serde(default)]
    tab: LeaderboardTab,
}

async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Json<Vec<LeaderboardEntry>> {
    Json(state.community.leaderboard(query.tab).await)
}

async fn list_groups(State(state): State<AppState>) -> Json<Vec<Group>> {
    Json(state.community.groups().await)
}

#[derive(Debug, Deserialize)]
struct CreateGroupRequest {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_group_emoji")]
    avatar_emoji: String,
}

fn default_group_emoji() -> String {
    "💪".to_string()
}

async fn create_group(
    State(state): State<AppState>,
    Json(request): Json<CreateGroupRequest>,
) -> AppResult<(StatusCode, Json<Group>)> {
    let group = state
        .community
        .create_group(&request.name, &request.description, &request.avatar_emoji)
        .await?;
    Ok((StatusCode::CREATED, Json(group)))
}

#[derive(Debug, Deserialize)]
struct JoinGroupRequest {
    join_code: String,
}

async fn join_group(
    State(state): State<AppState>,
    Json(request): Json<JoinGroupRequest>,
) -> AppResult<Json<Group>> {
    Ok(Json(state.community.join_group(&request.join_code).await?))
}

async fn get_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Message>>> {
    Ok(Json(state.community.group_messages(&id).await?))
}

#[derive(Debug, Deserialize)]
struct PostMessageRequest {
    content: String,
    #[serde(default = "default_sender")]
    sender: String,
    #[serde(default = "default_avatar")]
    avatar: String,
}

fn default_sender() -> String {
    "You".to_string()
}

fn default_avatar() -> String {
    "🏋️".to_string()
}

async fn post_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PostMessageRequest>,
) -> AppResult<(StatusCode, Json<Message>)> {
    let message = state
        .community
        .post_message(&id, &request.sender, &request.avatar, &request.content)
        .await?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::test_router;
    use axum_test::TestServer;
    use serde_json::json;

    #[tokio::test]
    async fn test_gym_listing() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let gyms: serde_json::Value = server.get("/api/gyms").await.json();
        let gyms = gyms.as_array().unwrap();
        assert_eq!(gyms.len(), 4);
        assert_eq!(gyms[0]["name"], "Lifetime Fitness");
        assert_eq!(gyms[3]["busy_level"], "Very High");
        assert_eq!(gyms[0]["top_lifters"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_busy_report() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let response = server
            .post("/api/gyms/3/busy")
            .json(&json!({"level": "High"}))
            .await;
        assert_eq!(response.status_code(), 200);

        let gym: serde_json::Value = response.json();
        assert_eq!(gym["busy_level"], "High");

        let response = server
            .post("/api/gyms/99/busy")
            .json(&json!({"level": "Low"}))
            .await;
        assert_eq!(response.status_code(), 404);
    }

    #[tokio::test]
    async fn test_leaderboard_tabs() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let gym: serde_json::Value = server.get("/api/leaderboard").await.json();
        let gym = gym.as_array().unwrap();
        assert_eq!(gym.len(), 8);
        assert_eq!(gym[0]["rank"], 1);
        assert_eq!(gym[0]["name"], "Marcus Strong");

        let friends: serde_json::Value = server
            .get("/api/leaderboard")
            .add_query_param("tab", "friends")
            .await
            .json();
        let friends = friends.as_array().unwrap();
        assert_eq!(friends.len(), 6);
        assert!(friends.iter().any(|e| e["is_current_user"] == true));
    }

    #[tokio::test]
    async fn test_group_lifecycle() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let groups: serde_json::Value = server.get("/api/groups").await.json();
        assert_eq!(groups.as_array().unwrap().len(), 3);

        let response = server
            .post("/api/groups")
            .json(&json!({"name": "Night Owls", "description": "Late sessions"}))
            .await;
        assert_eq!(response.status_code(), 201);

        let group: serde_json::Value = response.json();
        assert_eq!(group["member_count"], 1);
        let code = group["join_code"].as_str().unwrap();
        assert_eq!(code.len(), 8);

        let joined: serde_json::Value = server
            .post("/api/groups/join")
            .json(&json!({"join_code": code}))
            .await
            .json();
        assert_eq!(joined["member_count"], 2);

        let response = server
            .post("/api/groups/join")
            .json(&json!({"join_code": "NOPE0000"}))
            .await;
        assert_eq!(response.status_code(), 404);
    }

    #[tokio::test]
    async fn test_group_messages() {
        let (router, _) = test_router();
        let server = TestServer::new(router).unwrap();

        let history: serde_json::Value = server.get("/api/groups/1/messages").await.json();
        assert_eq!(history.as_array().unwrap().len(), 3);

        let response = server
            .post("/api/groups/1/messages")
            .json(&json!({"content": "See you at 6"}))
            .await;
        assert_eq!(response.status_code(), 201);

        let message: serde_json::Value = response.json();
        assert_eq!(message["sender"], "You");
        assert_eq!(message["timestamp"], "now");

        let history: serde_json::Value = server.get("/api/groups/1/messages").await.json();
        assert_eq!(history.as_array().unwrap().len(), 4);

        let response = server
            .post("/api/groups/1/messages")
            .json(&json!({"content": "  "}))
            .await;
        assert_eq!(response.status_code(), 400);
    }
}
