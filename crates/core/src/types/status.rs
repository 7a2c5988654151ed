//! Status enums for catalog entities.

use serde::{Deserialize, Serialize};

/// Stock availability of a product.
///
/// Serialized with the kebab-case keys the catalog content and API clients
/// use (`in-stock`, `out-of-stock`, `limited`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    #[default]
    InStock,
    OutOfStock,
    Limited,
}

impl Availability {
    /// The stable string key (matches the serde representation).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::OutOfStock => "out-of-stock",
            Self::Limited => "limited",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-stock" => Ok(Self::InStock),
            "out-of-stock" => Ok(Self::OutOfStock),
            "limited" => Ok(Self::Limited),
            _ => Err(format!("invalid availability: {s}")),
        }
    }
}
