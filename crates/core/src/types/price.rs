//! Price range representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An indicative price range for a product.
///
/// The catalog publishes ranges rather than exact prices - the floor price
/// for the cheapest variant and the ceiling for the most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest price in the currency's standard unit.
    pub min: Decimal,
    /// Highest price in the currency's standard unit.
    pub max: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: CurrencyCode,
}

impl PriceRange {
    /// Create a new price range.
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            min,
            max,
            currency_code,
        }
    }

    /// Format for display (e.g., "₹250 - ₹4500").
    #[must_use]
    pub fn display(&self) -> String {
        let symbol = self.currency_code.symbol();
        if self.min == self.max {
            format!("{symbol}{}", self.min)
        } else {
            format!("{symbol}{} - {symbol}{}", self.min, self.max)
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// The currency symbol used for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_range() {
        let range = PriceRange::new(Decimal::new(250, 0), Decimal::new(4500, 0), CurrencyCode::INR);
        assert_eq!(range.display(), "₹250 - ₹4500");
    }

    #[test]
    fn test_display_single_point() {
        let price = Decimal::new(1999, 2);
        let range = PriceRange::new(price, price, CurrencyCode::USD);
        assert_eq!(range.display(), "$19.99");
    }

    #[test]
    fn test_serde_currency_default() {
        let json = r#"{"min": "250", "max": "4500"}"#;
        let range: PriceRange = serde_json::from_str(json).unwrap();
        assert_eq!(range.currency_code, CurrencyCode::INR);
    }
}
