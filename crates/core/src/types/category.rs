//! Product category types.
//!
//! The catalog has six fixed categories. Unlike the usual stringly-typed
//! category key, this enum is enforced at deserialization time: a content
//! file or query parameter naming an unknown category fails to parse instead
//! of silently matching nothing.

use serde::{Deserialize, Serialize};

/// One of the six fixed product groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Paints,
    Hardware,
    Sanitary,
    Electricals,
    TilingSolutions,
    Misc,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Paints,
        Self::Hardware,
        Self::Sanitary,
        Self::Electricals,
        Self::TilingSolutions,
        Self::Misc,
    ];

    /// The category's stable string key (matches the serde representation).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paints => "paints",
            Self::Hardware => "hardware",
            Self::Sanitary => "sanitary",
            Self::Electricals => "electricals",
            Self::TilingSolutions => "tiling_solutions",
            Self::Misc => "misc",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error parsing a category key.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paints" => Ok(Self::Paints),
            "hardware" => Ok(Self::Hardware),
            "sanitary" => Ok(Self::Sanitary),
            "electricals" => Ok(Self::Electricals),
            "tiling_solutions" => Ok(Self::TilingSolutions),
            "misc" => Ok(Self::Misc),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

/// Static display metadata for a category.
///
/// Keyed by [`Category`] in the catalog content file; purely presentational
/// data the storefront needs to render navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// The category this metadata describes.
    pub category: Category,
    /// Human-readable display name (e.g., "Tiling Solutions").
    pub display_name: String,
    /// Accent color as a hex string (e.g., "#f59e0b").
    pub color: String,
    /// Icon asset reference.
    pub icon: String,
    /// Subcategory names within this category.
    #[serde(default)]
    pub subcategories: Vec<String>,
}
