//! Catalog inspection commands.
//!
//! Loads the same content files the API serves, from
//! `TOOLSHED_CONTENT_DIR` (default: `crates/api/content`).

use std::path::PathBuf;

use thiserror::Error;

use toolshed_api::catalog::{CatalogError, CatalogStore};
use toolshed_core::{Category, Product};

/// Errors that can occur during catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCmdError {
    /// Content files failed to load.
    #[error("catalog load error: {0}")]
    Load(#[from] CatalogError),

    /// Unknown category key.
    #[error("{0}")]
    UnknownCategory(#[from] toolshed_core::CategoryParseError),

    /// Unknown product id.
    #[error("no product with id: {0}")]
    UnknownProduct(String),
}

fn load_store() -> Result<CatalogStore, CatalogCmdError> {
    dotenvy::dotenv().ok();

    let content_dir = PathBuf::from(
        std::env::var("TOOLSHED_CONTENT_DIR")
            .unwrap_or_else(|_| "crates/api/content".to_string()),
    );

    Ok(CatalogStore::load(&content_dir)?)
}

fn log_product(product: &Product) {
    let price = product
        .price_range
        .map_or_else(|| "-".to_string(), |range| range.display());
    tracing::info!(
        "{:<12} {:<42} {:<18} {:<14} {}",
        product.id,
        product.name,
        product.category,
        product.availability,
        price
    );
}

/// List products, optionally filtered by category.
pub fn list(category: Option<&str>) -> Result<(), CatalogCmdError> {
    let store = load_store()?;

    match category {
        Some(key) => {
            let category: Category = key.parse()?;
            let mut count = 0;
            for product in store.products_by_category(category) {
                log_product(product);
                count += 1;
            }
            tracing::info!("{count} products in {category}");
        }
        None => {
            for product in store.products() {
                log_product(product);
            }
            tracing::info!("{} products total", store.products().len());
        }
    }

    Ok(())
}

/// Search products the way the API does.
pub fn search(query: &str) -> Result<(), CatalogCmdError> {
    let store = load_store()?;
    let results = store.search(query);

    for product in &results {
        log_product(product);
    }
    tracing::info!("{} products match '{query}'", results.len());

    Ok(())
}

/// Show a single product in full.
pub fn show(id: &str) -> Result<(), CatalogCmdError> {
    let store = load_store()?;
    let product = store
        .product_by_id(id)
        .ok_or_else(|| CatalogCmdError::UnknownProduct(id.to_string()))?;

    tracing::info!("id:           {}", product.id);
    tracing::info!("name:         {}", product.name);
    tracing::info!("description:  {}", product.description);
    tracing::info!("category:     {}", product.category);
    if let Some(subcategory) = &product.subcategory {
        tracing::info!("subcategory:  {subcategory}");
    }
    if let Some(brand) = &product.brand {
        tracing::info!("brand:        {brand}");
    }
    if let Some(range) = product.price_range {
        tracing::info!("price:        {}", range.display());
    }
    tracing::info!("availability: {}", product.availability);
    tracing::info!("features:     {}", product.features.join(", "));
    tracing::info!("tags:         {}", product.tags.join(", "));

    Ok(())
}
