//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "status": 500,
        "message": "Internal Server Error"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "status": 400,
        "message": "Validation Error: Missing required fields.",
        "details": { "missing": ["price"] }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "status": 404,
        "message": "Product with id 42 not found."
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - Missing or invalid API key",
    content_type = "application/json",
    example = json!({
        "success": false,
        "status": 401,
        "message": "Access Denied. Invalid or missing API key.",
        "hint": "Use the x-api-key header."
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);
