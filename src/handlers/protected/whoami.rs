use axum::extract::Extension;
use serde_json::json;

use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// GET /api/auth/whoami - echo the identity decoded from the credential
pub async fn whoami(Extension(user): Extension<AuthUser>) -> ApiResult {
    Ok(ApiResponse::payload(
        "user",
        json!({ "id": user.user_id }),
    ))
}
