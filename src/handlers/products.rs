use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use crate::database::models::Product;
use crate::error::ApiError;
use crate::handlers::AppState;
use crate::listing::{self, ListingQuery};
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/products - filtered, paginated listing of active products
///
/// The query string arrives as a flat string map; recognized keys are `page`,
/// `limit`, `category`, `minPrice`, `maxPrice`, `search`, `sortBy`, `order`.
/// Everything else is ignored, and malformed values quietly fall back to their
/// defaults instead of failing the request.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let query = ListingQuery::from_params(&params);
    let page = listing::fetch_page(state.store.as_ref(), &query).await?;

    Ok(Json(json!({
        "success": true,
        "count": page.products.len(),
        "data": {
            "products": page.products,
            "pagination": page.pagination,
        }
    })))
}

/// GET /api/products/:id - single active product
///
/// An id that is not a UUID cannot name a product, so it answers 404 just like
/// an unknown or inactive one.
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Product> {
    let id = uuid::Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Product not found"))?;

    match state.store.product_by_id(id).await? {
        Some(product) => Ok(ApiResponse::success(product)),
        None => Err(ApiError::not_found("Product not found")),
    }
}
