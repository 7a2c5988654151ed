//! The product catalog.
//!
//! This module loads the catalog content files (`products.json`,
//! `categories.json`) at startup and holds them in memory for the lifetime
//! of the process. The catalog is never mutated after load.
//!
//! Every query is a single linear scan over the product list. Misses are
//! reported as empty results or `None`, never as errors.

use std::path::Path;
use std::sync::Arc;

use toolshed_core::{Category, CategoryInfo, Product};

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },
    #[error("Parse error in {path}: {message}")]
    Parse { path: String, message: String },
}

/// In-memory catalog store.
///
/// Cheaply cloneable; the product and category lists are shared behind
/// `Arc`s.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<Vec<Product>>,
    categories: Arc<Vec<CategoryInfo>>,
}

impl CatalogStore {
    /// Load the catalog from the content directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either content file cannot be read or parsed.
    pub fn load(content_dir: &Path) -> Result<Self, CatalogError> {
        let products: Vec<Product> = load_json(&content_dir.join("products.json"))?;
        let categories: Vec<CategoryInfo> = load_json(&content_dir.join("categories.json"))?;

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "Catalog loaded"
        );

        Ok(Self {
            products: Arc::new(products),
            categories: Arc::new(categories),
        })
    }

    /// All products, in content-file order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products belonging to a category.
    pub fn products_by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Look up a single product by id.
    #[must_use]
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Case-insensitive substring search over name, description, brand,
    /// and tags (OR semantics).
    ///
    /// A blank query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }

        self.products
            .iter()
            .filter(|p| p.matches_query(&query_lower))
            .collect()
    }

    /// Products within a category's subcategory (case-insensitive name
    /// match, like the rest of the catalog's text comparisons).
    pub fn products_by_subcategory<'a>(
        &'a self,
        category: Category,
        subcategory: &'a str,
    ) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| {
            p.category == category
                && p.subcategory
                    .as_deref()
                    .is_some_and(|s| s.eq_ignore_ascii_case(subcategory))
        })
    }

    /// All category metadata, in display order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    /// Metadata for one category.
    #[must_use]
    pub fn category_info(&self, category: Category) -> Option<&CategoryInfo> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Read and deserialize one content file.
fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> CatalogStore {
        let content_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
        CatalogStore::load(&content_dir).expect("bundled content must load")
    }

    #[test]
    fn test_paints_category_has_twenty_products() {
        let store = store();
        let paints: Vec<_> = store.products_by_category(Category::Paints).collect();
        assert_eq!(paints.len(), 20);
        assert!(paints.iter().all(|p| p.category == Category::Paints));
    }

    #[test]
    fn test_every_category_is_populated() {
        let store = store();
        for category in Category::ALL {
            assert!(
                store.products_by_category(category).next().is_some(),
                "category {category} has no products"
            );
        }
    }

    #[test]
    fn test_product_by_id_known() {
        let store = store();
        let product = store.product_by_id("paint-001").unwrap();
        assert_eq!(product.name, "Asian Paints Royale");
        assert_eq!(product.category, Category::Paints);
        assert_eq!(product.brand.as_deref(), Some("Asian Paints"));
    }

    #[test]
    fn test_product_by_id_unknown_is_none() {
        assert!(store().product_by_id("paint-999").is_none());
    }

    #[test]
    fn test_search_matches_brand_and_tags_case_insensitively() {
        let store = store();
        let lower = store.search("berger");
        let upper = store.search("BERGER");
        assert_eq!(lower.len(), 4);
        assert_eq!(lower.len(), upper.len());
        assert!(lower.iter().all(|p| {
            p.brand.as_deref().is_some_and(|b| b.to_lowercase().contains("berger"))
                || p.tags.iter().any(|t| t.to_lowercase().contains("berger"))
        }));
    }

    #[test]
    fn test_search_matches_description_substring() {
        let store = store();
        let results = store.search("washable");
        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.matches_query("washable")));
    }

    #[test]
    fn test_search_no_match_returns_empty() {
        assert!(store().search("xyzzy-no-such-product").is_empty());
        assert!(store().search("   ").is_empty());
    }

    #[test]
    fn test_products_by_subcategory() {
        let store = store();
        let interior: Vec<_> = store
            .products_by_subcategory(Category::Paints, "Interior Emulsions")
            .collect();
        assert!(!interior.is_empty());
        assert!(interior
            .iter()
            .all(|p| p.subcategory.as_deref() == Some("Interior Emulsions")));

        // Case-insensitive subcategory name
        let interior_lower: Vec<_> = store
            .products_by_subcategory(Category::Paints, "interior emulsions")
            .collect();
        assert_eq!(interior.len(), interior_lower.len());

        // Wrong category + right subcategory matches nothing
        assert_eq!(
            store
                .products_by_subcategory(Category::Hardware, "Interior Emulsions")
                .count(),
            0
        );
    }

    #[test]
    fn test_category_metadata_covers_all_categories() {
        let store = store();
        assert_eq!(store.categories().len(), Category::ALL.len());
        for category in Category::ALL {
            let info = store.category_info(category).unwrap();
            assert!(!info.display_name.is_empty());
        }
    }
}
