use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::models::ErrorResponse;
use crate::llm::LlmError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream provider error: {0}")]
    Upstream(#[from] LlmError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_client_error() {
        let response = ApiError::InvalidInput("keyword must not be empty".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_is_bad_gateway() {
        let response = ApiError::Upstream(LlmError::EmptyCompletion).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
