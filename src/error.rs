//! Error handling for Spottr
//!
//! Centralized error types and handling for the application.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::signup::FieldError;
use crate::models::workout::WorkoutError;
use crate::services::community_service::CommunityServiceError;
use crate::services::feed_service::FeedServiceError;
use crate::services::workout_service::WorkoutServiceError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Workout error: {0}")]
    Workout(#[from] WorkoutServiceError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedServiceError),

    #[error("Community error: {0}")]
    Community(#[from] CommunityServiceError),

    #[error("Sign-up rejected")]
    SignUpRejected(Vec<FieldError>),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Workout(inner) => match inner {
                WorkoutServiceError::SessionNotFound(_)
                | WorkoutServiceError::UnknownTemplate(_)
                | WorkoutServiceError::UnknownExercise(_) => StatusCode::NOT_FOUND,
                WorkoutServiceError::Workout(workout) => match workout {
                    WorkoutError::ExerciseNotFound(_) | WorkoutError::SetNotFound(_) => {
                        StatusCode::NOT_FOUND
                    }
                    WorkoutError::LastSet => StatusCode::CONFLICT,
                    WorkoutError::UnknownExercise(_) => StatusCode::NOT_FOUND,
                },
            },
            AppError::Feed(inner) => match inner {
                FeedServiceError::PostNotFound(_) | FeedServiceError::FriendNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
            },
            AppError::Community(inner) => match inner {
                CommunityServiceError::GymNotFound(_)
                | CommunityServiceError::GroupNotFound(_)
                | CommunityServiceError::InvalidJoinCode(_) => StatusCode::NOT_FOUND,
                CommunityServiceError::EmptyGroupName | CommunityServiceError::EmptyMessage => {
                    StatusCode::BAD_REQUEST
                }
            },
            AppError::SignUpRejected(_) | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) | AppError::Serialization(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Workout(inner) => match inner {
                WorkoutServiceError::SessionNotFound(_) => "SessionNotFound",
                WorkoutServiceError::UnknownTemplate(_) => "TemplateNotFound",
                WorkoutServiceError::UnknownExercise(_) => "ExerciseNotFound",
                WorkoutServiceError::Workout(workout) => match workout {
                    WorkoutError::ExerciseNotFound(_) => "ExerciseNotFound",
                    WorkoutError::SetNotFound(_) => "SetNotFound",
                    WorkoutError::LastSet => "LastSet",
                    WorkoutError::UnknownExercise(_) => "ExerciseNotFound",
                },
            },
            AppError::Feed(inner) => match inner {
                FeedServiceError::PostNotFound(_) => "PostNotFound",
                FeedServiceError::FriendNotFound(_) => "FriendNotFound",
            },
            AppError::Community(inner) => match inner {
                CommunityServiceError::GymNotFound(_) => "GymNotFound",
                CommunityServiceError::GroupNotFound(_) => "GroupNotFound",
                CommunityServiceError::InvalidJoinCode(_) => "InvalidJoinCode",
                CommunityServiceError::EmptyGroupName => "EmptyGroupName",
                CommunityServiceError::EmptyMessage => "EmptyMessage",
            },
            AppError::SignUpRejected(_) => "SignUpRejected",
            AppError::Validation(_) => "ValidationError",
            AppError::NotFound(_) => "NotFound",
            AppError::BadRequest(_) => "BadRequest",
            AppError::Internal(_) => "InternalError",
            AppError::Serialization(_) => "SerializationError",
            AppError::Io(_) => "IoError",
        }
    }

    /// Check if this error should be logged as an error vs warning
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AppError::Internal(_) | AppError::Serialization(_) | AppError::Io(_)
        )
    }

    pub fn not_found(resource: &str) -> Self {
        AppError::NotFound(format!("{} not found", resource))
    }

    pub fn bad_request(message: &str) -> Self {
        AppError::BadRequest(message.to_string())
    }

    pub fn validation_error(message: &str) -> Self {
        AppError::Validation(message.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        if self.is_server_error() {
            tracing::error!(error = %message, code = error_code, "Request failed");
        } else {
            tracing::warn!(error = %message, code = error_code, "Request rejected");
        }

        // Sign-up failures carry the per-field errors the form renders
        let body = match self {
            AppError::SignUpRejected(errors) => Json(json!({
                "error": error_code,
                "message": message,
                "errors": errors,
                "timestamp": timestamp
            })),
            _ => Json(json!({
                "error": error_code,
                "message": message,
                "timestamp": timestamp
            })),
        };

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
