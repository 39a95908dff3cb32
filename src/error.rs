//! Error types for the chat relay
//!
//! One enum covers the caller-facing taxonomy: configuration, request
//! validation, upstream status translation, and transport failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} is not configured")]
    MissingCredential(&'static str),

    #[error("Invalid request body: {0}")]
    MalformedRequest(String),

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("Service temporarily unavailable. Please try again later.")]
    UpstreamUnavailable,

    #[error("Failed to process your request")]
    UpstreamFailure,

    #[error("Upstream request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Classify a non-success upstream status into a caller-facing error.
    ///
    /// 429 and 402 keep their status so the caller can decide on retry;
    /// everything else collapses to a generic 500.
    pub fn from_upstream_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            429 => AppError::RateLimited,
            402 => AppError::UpstreamUnavailable,
            _ => AppError::UpstreamFailure,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingCredential(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::UpstreamUnavailable => StatusCode::PAYMENT_REQUIRED,
            AppError::UpstreamFailure => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Transport detail is logged at the call site, not surfaced.
        let message = match &self {
            AppError::HttpError(_) => "Failed to process your request".to_string(),
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
