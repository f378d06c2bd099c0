use axum::{
    extract::{Extension, Path},
    Json,
};
use uuid::Uuid;

use crate::database::models::review::{Review, ReviewPayload};
use crate::database::models::Product;
use crate::database::DatabaseManager;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// POST /api/reviews/:product_id - review a product as the caller
pub async fn create(
    Extension(user): Extension<AuthUser>,
    Path(product_id): Path<Uuid>,
    Json(payload): Json<ReviewPayload>,
) -> ApiResult {
    let pool = DatabaseManager::pool().await?;

    // 404s when the product does not exist
    Product::find(&pool, product_id).await?;

    Review::insert(&pool, user.user_id, product_id, payload).await?;
    Ok(ApiResponse::created("Successfuly added review"))
}

/// GET /api/reviews/:product_id - all reviews for a product (global set, not
/// identity-filtered)
pub async fn list(Path(product_id): Path<Uuid>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    let reviews = Review::list_for_product(&pool, product_id).await?;
    Ok(ApiResponse::payload("reviews", reviews))
}
