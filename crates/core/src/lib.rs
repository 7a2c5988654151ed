//! Toolshed Core - Shared types library.
//!
//! This crate provides common types used across all Toolshed components:
//! - `api` - JSON HTTP API serving the catalog and auth endpoints
//! - `cli` - Command-line tools for catalog inspection and token minting
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, categories,
//!   availability, and price ranges
//! - [`product`] - The catalog product record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod product;
pub mod types;

pub use product::*;
pub use types::*;
