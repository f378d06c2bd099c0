use axum::Json;
use serde_json::Value;

use crate::config;
use crate::error::ApiError;

/// GET /api/country - proxy the third-party country-data service.
///
/// The upstream body is passed through verbatim, without the success
/// envelope. Upstream failures surface as an explicit 502 instead of being
/// swallowed.
pub async fn list() -> Result<Json<Value>, ApiError> {
    let url = &config::config().external.country_api_url;

    let response = reqwest::get(url).await.map_err(|e| {
        tracing::warn!("country service request failed: {}", e);
        ApiError::bad_gateway("Country service unavailable")
    })?;

    let data = response.json::<Value>().await.map_err(|e| {
        tracing::warn!("country service returned invalid payload: {}", e);
        ApiError::bad_gateway("Country service unavailable")
    })?;

    Ok(Json(data))
}
