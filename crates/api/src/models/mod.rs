//! Domain models for the API.

pub mod user;

pub use user::{User, UserProfile};
