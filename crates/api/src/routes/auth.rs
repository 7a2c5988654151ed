//! Authentication route handlers.
//!
//! JSON endpoints over the placeholder `AuthService`. Register and login
//! are live (quirks documented on each handler); refresh and logout are
//! stubs.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::models::UserProfile;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Simple acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Register a new user.
///
/// POST /v1/auth/register
///
/// Always returns 201 for any credentials with a parseable email - nothing
/// is checked against or written to storage.
///
/// # Errors
///
/// Returns 400 for an unparseable email; 500 if hashing or signing fails.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let (user, token) = state
        .auth()
        .register(&req.email, &req.password, req.name.as_deref())?;

    tracing::info!(user_id = %user.id, "registered user (not persisted)");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserProfile::from(&user),
        }),
    ))
}

/// Log a user in.
///
/// POST /v1/auth/login
///
/// Validates the password against the demo credential; the submitted email
/// is not consulted (see `AuthService::login`).
///
/// # Errors
///
/// Returns 401 if the password does not match the demo credential.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let (user, token) = state.auth().login(&req.email, &req.password)?;

    Ok(Json(AuthResponse {
        token,
        user: UserProfile::from(&user),
    }))
}

/// Refresh a token.
///
/// POST /v1/auth/refresh
///
/// # Errors
///
/// Always returns 501: there is no refresh protocol.
pub async fn refresh() -> Result<Json<MessageResponse>> {
    Err(ApiError::NotImplemented("token refresh is not implemented"))
}

/// Log a user out.
///
/// POST /v1/auth/logout
///
/// Returns 200 without any session effect - tokens are stateless and there
/// is no revocation list to add them to.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "logged out",
    })
}
