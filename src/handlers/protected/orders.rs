use axum::{
    extract::{Extension, Path},
    Json,
};
use uuid::Uuid;

use crate::database::models::order::{Order, OrderPayload};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// POST /api/orders - create an order owned by the caller
pub async fn create(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<OrderPayload>,
) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    Order::insert(&pool, user.user_id, payload).await?;
    Ok(ApiResponse::created("Successfuly placed order"))
}

/// GET /api/orders - the caller's orders only
pub async fn list(Extension(user): Extension<AuthUser>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    let orders = Order::list_for_user(&pool, user.user_id).await?;
    Ok(ApiResponse::payload("orders", orders))
}

/// GET /api/orders/:id - single order, owner-filtered
pub async fn show(Extension(user): Extension<AuthUser>, Path(id): Path<Uuid>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    let order = Order::find_for_user(&pool, id, user.user_id).await?;
    Ok(ApiResponse::payload("order", order))
}

/// DELETE /api/orders/:id - delete the caller's order
pub async fn remove(Extension(user): Extension<AuthUser>, Path(id): Path<Uuid>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    if !Order::delete_for_user(&pool, id, user.user_id).await? {
        return Err(ApiError::not_found("Order not found"));
    }
    Ok(ApiResponse::message("Order deleted"))
}
