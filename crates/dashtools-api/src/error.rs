//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// No plugin registered under the requested id
    #[error("Plugin not found")]
    PluginNotFound(String),

    /// Anything the client cannot fix
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::PluginNotFound(id) => {
                tracing::debug!("Plugin not found: {}", id);
                StatusCode::NOT_FOUND
            }
            ApiError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
