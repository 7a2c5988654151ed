//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures server errors to Sentry
//! before responding to the client. All route handlers should return
//! `Result<T, ApiError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::AuthError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Endpoint exists but has no implementation behind it yet.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(
            self,
            Self::Internal(_)
                | Self::Auth(AuthError::PasswordHash | AuthError::TokenSigning)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials | AuthError::InvalidToken => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
                AuthError::PasswordHash | AuthError::TokenSigning => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials | AuthError::InvalidToken => {
                    "Invalid credentials".to_string()
                }
                AuthError::InvalidEmail(e) => e.to_string(),
                AuthError::PasswordHash | AuthError::TokenSigning => {
                    "Internal server error".to_string()
                }
            },
            Self::NotImplemented(msg) => (*msg).to_string(),
            _ => self.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
