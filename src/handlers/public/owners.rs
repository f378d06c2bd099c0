use axum::Json;

use crate::database::models::owner::{Owner, OwnerPayload};
use crate::database::DatabaseManager;
use crate::middleware::response::{ApiResponse, ApiResult};

/// POST /api/owners - create a store owner profile
pub async fn create(Json(payload): Json<OwnerPayload>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    Owner::insert(&pool, payload).await?;
    Ok(ApiResponse::created("Success"))
}

/// GET /api/owners - all store owners
pub async fn list() -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    let owners = Owner::list(&pool).await?;
    Ok(ApiResponse::payload("owners", owners))
}
