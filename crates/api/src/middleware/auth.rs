//! Authentication middleware and extractors.
//!
//! Provides an extractor for requiring a bearer token in route handlers.

use axum::{
    Json,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::services::Claims;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// Decodes the `Authorization: Bearer` header against the configured
/// signing secret and yields the token's claims. Note that this is the full
/// extent of authorization in this service: the claims are not checked
/// against any user store, because there is none.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(claims): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", claims.email)
/// }
/// ```
pub struct RequireAuth(pub Claims);

/// Error returned when a valid bearer token is required but absent.
pub enum AuthRejection {
    /// No `Authorization: Bearer` header on the request.
    MissingToken,
    /// The token failed to decode or verify.
    InvalidToken,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let message = match self {
            Self::MissingToken => "missing bearer token",
            Self::InvalidToken => "invalid or expired token",
        };
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or(AuthRejection::MissingToken)?;

        let app_state = AppState::from_ref(state);
        let claims = app_state
            .auth()
            .verify_token(token)
            .map_err(|_| AuthRejection::InvalidToken)?;

        Ok(Self(claims))
    }
}
