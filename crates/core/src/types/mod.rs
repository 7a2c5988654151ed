//! Core types for Toolshed.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use category::{Category, CategoryInfo, CategoryParseError};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{CurrencyCode, PriceRange};
pub use status::Availability;
