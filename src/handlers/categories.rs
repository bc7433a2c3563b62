use axum::extract::State;

use crate::database::models::Category;
use crate::handlers::AppState;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /api/categories - all categories, ordered by name
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Category>> {
    let categories = state.store.list_categories().await?;
    Ok(ApiResponse::success(categories))
}
