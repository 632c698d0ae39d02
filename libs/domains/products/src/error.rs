use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Validation Error: Missing required fields.";
pub const INVALID_PRICE_MESSAGE: &str = "Validation Error: Price must be a positive number.";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with id {0} not found.")]
    NotFound(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Price must be a positive number")]
    InvalidPrice,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProductError::MissingFields(fields) => AppError::validation(
                MISSING_FIELDS_MESSAGE,
                Some(serde_json::json!({ "missing": fields })),
            ),
            ProductError::InvalidPrice => AppError::validation(INVALID_PRICE_MESSAGE, None),
            ProductError::Validation(msg) => AppError::validation(msg, None),
            ProductError::InvalidBody(msg) => AppError::BadRequest(msg),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_message_names_id() {
        let app: AppError = ProductError::NotFound("abc".into()).into();
        assert_eq!(app.status(), StatusCode::NOT_FOUND);
        assert_eq!(app.to_string(), "Not Found: Product with id abc not found.");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ProductError::MissingFields(vec!["name"]), StatusCode::BAD_REQUEST),
            (ProductError::InvalidPrice, StatusCode::BAD_REQUEST),
            (ProductError::InvalidBody("x".into()), StatusCode::BAD_REQUEST),
            (ProductError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }
}
