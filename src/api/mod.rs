//! API module for Spottr
//!
//! Contains all REST API endpoints and routing.

pub mod community;
pub mod feed;
pub mod signup;
pub mod workout;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::mock::MockStore;
use crate::services::{Clock, CommunityService, FeedService, WorkoutService};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub workouts: WorkoutService,
    pub feed: FeedService,
    pub community: CommunityService,
    pub store: Arc<MockStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<MockStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            workouts: WorkoutService::new(store.clone(), clock.clone()),
            feed: FeedService::new(store.clone()),
            community: CommunityService::new(store.clone()),
            store,
            clock,
        }
    }
}

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState, config: &Config) -> Router {
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_origin(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse::<header::HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_origin(origins)
    };

    Router::new()
        .route("/api/health", get(health_check))
        .merge(workout::routes())
        .merge(feed::routes())
        .merge(community::routes())
        .merge(signup::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}


#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check() {
        let (router, _) = super::test_support::test_router();
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/health").await;
        assert_eq!(response.status_code(), 200);

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}
