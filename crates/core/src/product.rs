//! Catalog product record.
//!
//! Products are authored in the catalog content file and loaded once at
//! startup; they are never created or mutated at runtime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Availability, Category, PriceRange, ProductId};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stable slug id (e.g., `paint-001`).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Image asset path.
    pub image: String,
    /// The category this product belongs to.
    pub category: Category,
    /// Optional subcategory name within the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Manufacturer brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Indicative price range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// Feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,
    /// Stock availability.
    #[serde(default)]
    pub availability: Availability,
    /// Free-form search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the record was authored.
    pub created_at: DateTime<Utc>,
    /// When the record was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Case-insensitive substring match against name, description, brand,
    /// and tags (OR semantics).
    ///
    /// The query is expected to be lowercased already; the catalog store
    /// lowercases once per search rather than once per product.
    #[must_use]
    pub fn matches_query(&self, query_lower: &str) -> bool {
        if query_lower.is_empty() {
            return false;
        }

        self.name.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self
                .brand
                .as_deref()
                .is_some_and(|b| b.to_lowercase().contains(query_lower))
            || self
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(query_lower))
    }
}
