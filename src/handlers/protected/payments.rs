use axum::{extract::Extension, Json};

use crate::database::models::payment::{Payment, PaymentPayload};
use crate::database::DatabaseManager;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// POST /api/payments - record a payment stamped with the caller's identity
pub async fn create(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<PaymentPayload>,
) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    Payment::insert(&pool, user.user_id, payload).await?;
    Ok(ApiResponse::created("Successfuly added payment"))
}

/// GET /api/payments - all payments (global set, not identity-filtered)
pub async fn list() -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    let payments = Payment::list(&pool).await?;
    Ok(ApiResponse::payload("payments", payments))
}
