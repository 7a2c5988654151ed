//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Health check
//!
//! # Auth
//! POST /v1/auth/register        - Register (always succeeds, nothing stored)
//! POST /v1/auth/login           - Login against the demo credential
//! POST /v1/auth/refresh         - Token refresh (501 stub)
//! POST /v1/auth/logout          - Logout (no session effect)
//!
//! # Users
//! GET  /v1/users/profile        - Demo profile (requires bearer token)
//! PUT  /v1/users/profile        - Profile update (501 stub)
//! GET  /v1/users                - User listing (501 stub)
//!
//! # Catalog
//! GET  /v1/products             - Product listing (category/subcategory filters)
//! GET  /v1/products/search      - Substring search (?q=)
//! GET  /v1/products/{id}        - Product detail
//! GET  /v1/categories           - Category metadata listing
//! GET  /v1/categories/{key}     - Category metadata + its products
//! ```

pub mod auth;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no dependencies to
/// probe - the catalog is loaded before the router is built.
async fn health() -> &'static str {
    "ok"
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list))
        .route("/profile", get(users::profile).put(users::update_profile))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/search", get(products::search))
        .route("/{id}", get(products::show))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::categories))
        .route("/{key}", get(products::category_show))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/v1/auth", auth_routes())
        .nest("/v1/users", user_routes())
        .nest("/v1/products", product_routes())
        .nest("/v1/categories", category_routes())
}
