use axum::Json;

use crate::database::models::category::{Category, CategoryPayload};
use crate::database::DatabaseManager;
use crate::middleware::response::{ApiResponse, ApiResult};

/// POST /api/categories - create a category
pub async fn create(Json(payload): Json<CategoryPayload>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    Category::insert(&pool, payload).await?;
    Ok(ApiResponse::created("Success"))
}

/// GET /api/categories - all categories
pub async fn list() -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    let categories = Category::list(&pool).await?;
    Ok(ApiResponse::payload("categories", categories))
}
