use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Success envelope for API responses.
///
/// Every success body is `{ "success": true, ... }` carrying either a
/// `message` string or a payload field named after the resource
/// (`"products"`, `"adresses"`, ...), matching the wire format of the
/// original API.
#[derive(Debug)]
pub struct ApiResponse {
    body: Value,
    status_code: StatusCode,
}

impl ApiResponse {
    /// Create a message-only success response with 200 status
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            body: json!({ "success": true, "message": message.into() }),
            status_code: StatusCode::OK,
        }
    }

    /// Create a 201 Created message response
    pub fn created(message: impl Into<String>) -> Self {
        Self {
            body: json!({ "success": true, "message": message.into() }),
            status_code: StatusCode::CREATED,
        }
    }

    /// Create a success response whose payload field is named after the
    /// resource, e.g. `payload("products", rows)`.
    pub fn payload<T: Serialize>(key: &'static str, data: T) -> Self {
        let value = match serde_json::to_value(data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("failed to serialize response payload: {}", e);
                return Self {
                    body: json!({ "success": false, "message": "Failed to format response" }),
                    status_code: StatusCode::INTERNAL_SERVER_ERROR,
                };
            }
        };

        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(true));
        body.insert(key.to_string(), value);

        Self {
            body: Value::Object(body),
            status_code: StatusCode::OK,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}

/// Result type for handlers: success envelope or typed API error
pub type ApiResult = Result<ApiResponse, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_envelope_is_keyed_by_resource() {
        let response = ApiResponse::payload("categories", vec!["Electronics"]);
        assert_eq!(response.status_code, StatusCode::OK);
        assert_eq!(response.body["success"], json!(true));
        assert_eq!(response.body["categories"], json!(["Electronics"]));
    }

    #[test]
    fn message_envelope_carries_flag_and_text() {
        let response = ApiResponse::created("Successfuly added Adress");
        assert_eq!(response.status_code, StatusCode::CREATED);
        assert_eq!(response.body["success"], json!(true));
        assert_eq!(response.body["message"], json!("Successfuly added Adress"));
    }
}
