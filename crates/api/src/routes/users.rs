//! User route handlers.
//!
//! The profile read returns the hard-coded demo identity; the write paths
//! are unimplemented-endpoint stubs. All three sit behind the bearer-token
//! extractor, which is the only authorization this service performs.

use axum::{Json, extract::State};

use crate::error::{ApiError, Result};
use crate::middleware::RequireAuth;
use crate::models::UserProfile;
use crate::state::AppState;

/// Get the current user's profile.
///
/// GET /v1/users/profile
///
/// Returns the demo identity regardless of whose token is presented -
/// there is no user store to resolve the token's subject against.
///
/// # Errors
///
/// Returns 401 without a valid bearer token.
pub async fn profile(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
) -> Result<Json<UserProfile>> {
    let user = state.auth().demo_user()?;
    Ok(Json(UserProfile::from(&user)))
}

/// Update the current user's profile.
///
/// PUT /v1/users/profile
///
/// # Errors
///
/// Always returns 501: there is nothing to update.
pub async fn update_profile(RequireAuth(_claims): RequireAuth) -> Result<Json<UserProfile>> {
    Err(ApiError::NotImplemented(
        "profile updates are not implemented",
    ))
}

/// List all users.
///
/// GET /v1/users
///
/// # Errors
///
/// Always returns 501: there are no users to list.
pub async fn list(RequireAuth(_claims): RequireAuth) -> Result<Json<Vec<UserProfile>>> {
    Err(ApiError::NotImplemented("user listing is not implemented"))
}
