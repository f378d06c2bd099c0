use axum::{
    extract::{Extension, Path},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::address::{Address, AddressPayload};
use crate::database::models::User;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// POST /api/adresses - create an address stamped with the caller's identity
pub async fn create(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<AddressPayload>,
) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    Address::insert(&pool, user.user_id, payload).await?;
    Ok(ApiResponse::created("Successfuly added Adress"))
}

/// GET /api/adresses - the caller's addresses only
pub async fn list(Extension(user): Extension<AuthUser>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    let addresses = Address::list_for_user(&pool, user.user_id).await?;
    Ok(ApiResponse::payload("adresses", addresses))
}

/// GET /api/adresses/:id - single address, owner-filtered like every other
/// address operation
pub async fn show(Extension(user): Extension<AuthUser>, Path(id): Path<Uuid>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    let address = Address::find_for_user(&pool, id, user.user_id).await?;
    Ok(ApiResponse::payload("adresse", address))
}

/// PUT /api/adresses/:id - partial update of the caller's address; a missing
/// target is an explicit 404, not a silent no-op
pub async fn update(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(changes): Json<AddressPayload>,
) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    if !Address::update_for_user(&pool, id, user.user_id, changes).await? {
        return Err(ApiError::not_found("Address not found"));
    }
    Ok(ApiResponse::message("Address updated"))
}

/// DELETE /api/adresses/:id - delete the caller's address
pub async fn remove(Extension(user): Extension<AuthUser>, Path(id): Path<Uuid>) -> ApiResult {
    let pool = DatabaseManager::pool().await?;
    if !Address::delete_for_user(&pool, id, user.user_id).await? {
        return Err(ApiError::not_found("Address not found"));
    }
    Ok(ApiResponse::message("Address deleted"))
}

#[derive(Debug, Deserialize)]
pub struct SetDefaultPayload {
    pub id: Uuid,
}

/// PUT /api/adresses/set/default - mark one of the caller's addresses as the
/// default delivery address
pub async fn set_default(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<SetDefaultPayload>,
) -> ApiResult {
    let pool = DatabaseManager::pool().await?;

    // The address must belong to the caller before it can become the default
    Address::find_for_user(&pool, payload.id, user.user_id).await?;

    if !User::set_default_address(&pool, user.user_id, payload.id).await? {
        return Err(ApiError::not_found("User not found"));
    }
    Ok(ApiResponse::message("Default address updated"))
}
