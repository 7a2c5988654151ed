//! Catalog route handlers.
//!
//! Thin JSON mappings over the catalog query functions. Unknown ids are
//! 404s; unknown category keys in query parameters are 400s - the category
//! enum is enforced at the request boundary, not just in the type system.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use toolshed_core::{Category, CategoryInfo, Product};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

/// Query parameters for product search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// Search response body.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub products: Vec<Product>,
}

/// Category detail response body.
#[derive(Debug, Serialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub info: CategoryInfo,
    pub products: Vec<Product>,
}

/// List products, optionally filtered by category and subcategory.
///
/// GET /v1/products?category=paints&subcategory=Interior%20Emulsions
///
/// # Errors
///
/// Returns 400 for an unknown category key, or for a subcategory filter
/// without a category.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>> {
    let catalog = state.catalog();

    let products = match (query.category.as_deref(), query.subcategory.as_deref()) {
        (None, None) => catalog.products().to_vec(),
        (Some(key), None) => {
            let category = parse_category(key)?;
            catalog.products_by_category(category).cloned().collect()
        }
        (Some(key), Some(subcategory)) => {
            let category = parse_category(key)?;
            catalog
                .products_by_subcategory(category, subcategory)
                .cloned()
                .collect()
        }
        (None, Some(_)) => {
            return Err(ApiError::BadRequest(
                "subcategory filter requires a category".to_string(),
            ));
        }
    };

    Ok(Json(products))
}

/// Search products by substring.
///
/// GET /v1/products/search?q=berger
///
/// An empty query matches nothing - the response carries an empty list
/// rather than an error.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let products: Vec<Product> = state.catalog().search(&query.q).into_iter().cloned().collect();

    Json(SearchResponse {
        query: query.q,
        count: products.len(),
        products,
    })
}

/// Get a single product.
///
/// GET /v1/products/{id}
///
/// # Errors
///
/// Returns 404 for an unknown product id.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .product_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(id))
}

/// List category metadata.
///
/// GET /v1/categories
pub async fn categories(State(state): State<AppState>) -> Json<Vec<CategoryInfo>> {
    Json(state.catalog().categories().to_vec())
}

/// Get one category's metadata together with its products.
///
/// GET /v1/categories/{key}
///
/// # Errors
///
/// Returns 404 for an unknown category key or one with no metadata entry.
pub async fn category_show(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CategoryDetail>> {
    let category: Category = key
        .parse()
        .map_err(|_| ApiError::NotFound(key.clone()))?;

    let catalog = state.catalog();
    let info = catalog
        .category_info(category)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(key))?;

    let products = catalog.products_by_category(category).cloned().collect();

    Ok(Json(CategoryDetail { info, products }))
}

/// Parse a category query value, mapping failures to 400.
fn parse_category(key: &str) -> Result<Category> {
    key.parse()
        .map_err(|e: toolshed_core::CategoryParseError| ApiError::BadRequest(e.to_string()))
}
