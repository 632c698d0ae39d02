pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every failure leaving the service has this shape:
/// - `success`: always `false`
/// - `status`: the HTTP status code, repeated in the body
/// - `message`: human-readable message (generic for 500-class failures)
/// - `hint`: optional remediation hint (e.g. which header to send)
/// - `details`: optional structured detail (e.g. missing fields)
///
/// # JSON Example
///
/// ```json
/// {
///   "success": false,
///   "status": 404,
///   "message": "Product with id 42 not found."
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Guards and handlers never write error responses themselves; they return an
/// `AppError` and its [`IntoResponse`] implementation is the single place
/// where failures are serialized.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {message}")]
    Validation {
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
        hint: Option<String>,
    },

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// A 400 failure carrying structured detail.
    pub fn validation(message: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        AppError::Validation {
            message: message.into(),
            details,
        }
    }

    /// A 401 failure with an optional remediation hint.
    pub fn unauthorized(message: impl Into<String>, hint: Option<&str>) -> Self {
        AppError::Unauthorized {
            message: message.into(),
            hint: hint.map(str::to_string),
        }
    }

    /// HTTP status this failure maps to.
    ///
    /// Extractor rejections are always 400, whatever status axum would pick.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::JsonExtractorRejection(_)
            | AppError::PathExtractorRejection(_)
            | AppError::QueryExtractorRejection(_)
            | AppError::ValidationError(_)
            | AppError::Validation { .. }
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, hint, details, code) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (e.body_text(), None, None, ErrorCode::JsonExtraction)
            }
            AppError::PathExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::PathExtraction.code(),
                    "Path extraction error: {:?}",
                    e
                );
                (e.body_text(), None, None, ErrorCode::PathExtraction)
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::QueryExtraction.code(),
                    "Query extraction error: {:?}",
                    e
                );
                (e.body_text(), None, None, ErrorCode::QueryExtraction)
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (
                    ErrorCode::ValidationError.default_message().to_string(),
                    None,
                    Some(serde_json::to_value(&e).unwrap_or(serde_json::Value::Null)),
                    ErrorCode::ValidationError,
                )
            }
            AppError::Validation { message, details } => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation failed: {}",
                    message
                );
                (message, None, details, ErrorCode::ValidationError)
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (msg, None, None, ErrorCode::BadRequest)
            }
            AppError::Unauthorized { message, hint } => {
                tracing::info!(
                    error_code = ErrorCode::Unauthorized.code(),
                    "Unauthorized: {}",
                    message
                );
                (message, hint, None, ErrorCode::Unauthorized)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (msg, None, None, ErrorCode::NotFound)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (msg, None, None, ErrorCode::InternalError)
            }
        };

        // Server-side failures never leak their original message.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            messages::INTERNAL_ERROR.to_string()
        } else {
            message
        };

        tracing::debug!(error = code.as_str(), status = status.as_u16(), "Responding with error");

        let body = Json(ErrorResponse {
            success: false,
            status: status.as_u16(),
            message,
            hint,
            details,
        });

        (status, body).into_response()
    }
}
