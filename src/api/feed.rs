//! Feed API Endpoints
//!
//! Feed tabs, reaction toggling, comments, and friend nudges.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::api::AppState;
use crate::error::AppResult;
use crate::models::feed::{Post, ReactionKind, ReactionOutcome};
use crate::services::{FeedTab, NudgeReceipt};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/feed", get(get_feed))
        .route("/api/posts/:id/react", post(react))
        .route("/api/posts/:id/comments", post(add_comment))
        .route("/api/users/:id/nudge", post(nudge))
}

#[derive(Debug, Deserialize)]
struct FeedQuery {
    #[serde(default)]
    tab: FeedTab,
}

async fn get_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Json<Vec<Post>> {
    Json(state.feed.feed(query.tab).await)
}

#[derive(Debug, Deserialize)]
struct ReactRequest {
    reaction_type: ReactionKind,
}

async fn react(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ReactRequest>,
) -> AppResult<Json<ReactionOutcome>> {
    Ok(Json(state.feed.react(&id, request.reaction_type).await?))
}

#[derive(Debug, Deserialize)]
struct CommentRequest {
    content: String,
    #[serde(default = "default_author")]
    author: String,
}

fn default_author() -> String {
    "You".to_string()
}

async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CommentRequest>,
) -> AppResult<Json<Post>> {
    Ok(Json(
        state
            .feed
            .add_comment(&id, &request.author, &request.content)
            .await?,
    ))
}

async fn nudge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<NudgeReceipt>> {
    Ok(Json(state.feed.nudge(&id).await?))
}
