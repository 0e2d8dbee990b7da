//! Per-request failures and their HTTP mapping.
//!
//! Bodies are fixed plain-text messages; upstream detail is logged, never
//! returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request method")]
    MethodNotAllowed,

    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("Prompt and model are required")]
    MissingFields,

    #[error("Failed to invoke Bedrock model")]
    Upstream,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidPayload | ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
