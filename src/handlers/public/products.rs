use axum::{extract::Path, Json};
use uuid::Uuid;

use crate::database::models::product::{Product, ProductPayload};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};

/// POST /api/products - create a product from a flat field set
pub async fn create(Json(payload): Json<ProductPayload>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    Product::insert(&pool, payload).await?;
    Ok(ApiResponse::created("Success"))
}

/// GET /api/products - all products with owner, category and review ratings
/// embedded at read time
pub async fn list() -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    let products = Product::list_expanded(&pool).await?;
    Ok(ApiResponse::payload("products", products))
}

/// GET /api/products/:id - single product, same expansion as list
pub async fn show(Path(id): Path<Uuid>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    let product = Product::find_expanded(&pool, id).await?;
    Ok(ApiResponse::payload("product", product))
}

/// PUT /api/products/:id - partial update, field-present-wins
pub async fn update(Path(id): Path<Uuid>, Json(changes): Json<ProductPayload>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    if !Product::update(&pool, id, changes).await? {
        return Err(ApiError::not_found("Product not found"));
    }
    Ok(ApiResponse::message("Product updated"))
}

/// DELETE /api/products/:id
pub async fn remove(Path(id): Path<Uuid>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    if !Product::delete(&pool, id).await? {
        return Err(ApiError::not_found("Product not found"));
    }
    Ok(ApiResponse::message("Product deleted"))
}
