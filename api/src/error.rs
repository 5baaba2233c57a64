//! Unified error types for the receipt points API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and storage errors
//! - `ScoreError`: Receipt fields the scorer could not interpret
//! - `ConfigError`: Invalid startup configuration
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Scoring errors, reported in the order the rules read the fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("invalid total: {0:?}")]
    UnparsableTotal(String),

    #[error("invalid price {price:?} for item {description:?}")]
    UnparsablePrice { description: String, price: String },

    #[error("receipt is worth more points than can be counted")]
    PointsOverflow,

    #[error("invalid purchase date/time {date:?} {time:?}, expected YYYY-MM-DD HH:MM")]
    UnparsableDateTime { date: String, time: String },
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Score(#[from] ScoreError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::Validation(_))
            | AppError::Score(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Domain(DomainError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            AppError::Domain(DomainError::Validation(msg)) => msg.clone(),
            AppError::Domain(DomainError::Storage(msg)) => {
                tracing::error!("Storage error: {}", msg);
                "internal server error".to_string()
            }
            AppError::Score(e) => e.to_string(),
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
