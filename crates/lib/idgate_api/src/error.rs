//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use idgate_core::login::LoginError;
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Orchestration failure: {0}")]
    Orchestration(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            AppError::InvalidParameter(m) => {
                (StatusCode::BAD_REQUEST, "invalid_parameter", m.as_str())
            }
            AppError::Orchestration(m) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "orchestration_error",
                m.as_str(),
            ),
        };
        error!(%status, "{self}");
        let body = Json(ErrorResponse {
            error: kind.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<LoginError> for AppError {
    fn from(e: LoginError) -> Self {
        match e {
            LoginError::InvalidParameter(name) => AppError::InvalidParameter(name.to_string()),
            LoginError::Orchestration(msg) => AppError::Orchestration(msg),
        }
    }
}
