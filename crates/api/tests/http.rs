//! In-process tests for the HTTP surface.
//!
//! Drives the assembled router directly with `tower::ServiceExt::oneshot`,
//! so the full request/response cycle is covered without a live server.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use toolshed_api::catalog::CatalogStore;
use toolshed_api::config::ApiConfig;
use toolshed_api::routes;
use toolshed_api::state::AppState;

const DEMO_PASSWORD: &str = "demo1234";

fn test_app() -> Router {
    let content_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
    let catalog = CatalogStore::load(&content_dir).expect("bundled content must load");

    let config = ApiConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        content_dir,
        jwt_secret: SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6"),
        sentry_dsn: None,
    };

    let state = AppState::new(config, catalog).expect("state must initialize");
    routes::routes().with_state(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, json)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = send(test_app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_string()));
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_register_returns_201_with_token_and_profile() {
    let req = post_json(
        "/v1/auth/register",
        &serde_json::json!({
            "email": "customer@toolshed.example",
            "password": "hunter2!",
            "name": "Customer"
        }),
    );
    let (status, body) = send(test_app(), req).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body["user"]["id"]
        .as_str()
        .is_some_and(|id| id.starts_with("user-")));
    assert_eq!(body["user"]["email"], "customer@toolshed.example");
    // The password hash must never appear in a response body
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_rejects_unparseable_email() {
    let req = post_json(
        "/v1/auth/register",
        &serde_json::json!({ "email": "not-an-email", "password": "hunter2!" }),
    );
    let (status, _) = send(test_app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_accepts_demo_password_for_any_email() {
    // Placeholder behavior: the submitted email is not consulted.
    let req = post_json(
        "/v1/auth/login",
        &serde_json::json!({ "email": "whoever@wherever.example", "password": DEMO_PASSWORD }),
    );
    let (status, body) = send(test_app(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "demo@toolshed.example");
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let req = post_json(
        "/v1/auth/login",
        &serde_json::json!({ "email": "demo@toolshed.example", "password": "wrong" }),
    );
    let (status, _) = send(test_app(), req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_is_a_501_stub() {
    let req = post_json("/v1/auth/refresh", &serde_json::json!({}));
    let (status, body) = send(test_app(), req).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_logout_returns_200_without_effect() {
    let req = post_json("/v1/auth/logout", &serde_json::json!({}));
    let (status, body) = send(test_app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "logged out");
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_profile_requires_bearer_token() {
    let (status, _) = send(test_app(), get("/v1/users/profile")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_returns_demo_identity_with_valid_token() {
    let app = test_app();

    let register = post_json(
        "/v1/auth/register",
        &serde_json::json!({ "email": "customer@toolshed.example", "password": "hunter2!" }),
    );
    let (_, body) = send(app.clone(), register).await;
    let token = body["token"].as_str().unwrap().to_owned();

    let req = Request::builder()
        .uri("/v1/users/profile")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, req).await;

    assert_eq!(status, StatusCode::OK);
    // Hard-coded demo object regardless of the token's subject
    assert_eq!(body["id"], "user-0001");
    assert_eq!(body["email"], "demo@toolshed.example");
}

#[tokio::test]
async fn test_user_write_paths_are_501_stubs() {
    let app = test_app();

    let login = post_json(
        "/v1/auth/login",
        &serde_json::json!({ "email": "demo@toolshed.example", "password": DEMO_PASSWORD }),
    );
    let (_, body) = send(app.clone(), login).await;
    let token = body["token"].as_str().unwrap().to_owned();

    let put = Request::builder()
        .method("PUT")
        .uri("/v1/users/profile")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, _) = send(app.clone(), put).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

    let list = Request::builder()
        .uri("/v1/users")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app, list).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_products_filtered_by_category() {
    let (status, body) = send(test_app(), get("/v1/products?category=paints")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_products_unknown_category_is_400() {
    let (status, _) = send(test_app(), get("/v1/products?category=plumbing")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_products_subcategory_requires_category() {
    let (status, _) = send(test_app(), get("/v1/products?subcategory=Locks")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_finds_berger_products() {
    let (status, body) = send(test_app(), get("/v1/products/search?q=berger")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
    assert_eq!(body["products"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_product_detail_and_404() {
    let (status, body) = send(test_app(), get("/v1/products/paint-001")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Asian Paints Royale");

    let (status, _) = send(test_app(), get("/v1/products/paint-999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_categories_listing_and_detail() {
    let (status, body) = send(test_app(), get("/v1/categories")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);

    let (status, body) = send(test_app(), get("/v1/categories/tiling_solutions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display_name"], "Tiling Solutions");
    assert!(!body["products"].as_array().unwrap().is_empty());

    let (status, _) = send(test_app(), get("/v1/categories/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
