//! Integration tests for Toolshed.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the API server
//! cargo run -p toolshed-api
//!
//! # Run integration tests (they are #[ignore]d by default)
//! cargo test -p toolshed-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `auth_api` - Register/login/stub endpoint tests
//! - `catalog_api` - Product and category endpoint tests
//!
//! The in-process router tests that run on every `cargo test` live in the
//! api crate itself (`crates/api/tests/http.rs`); the tests here exercise a
//! real server over TCP, including middleware and serialization exactly as
//! deployed.
