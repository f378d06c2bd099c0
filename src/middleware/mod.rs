pub mod auth;
pub mod response;

pub use auth::{verify_token_middleware, AuthUser};
pub use response::{ApiResponse, ApiResult};
