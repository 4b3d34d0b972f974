//! Reusable OpenAPI response types for consistent API documentation.

use super::{DomainErrorBody, ErrorResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": { "type": "INTERNAL_ERROR", "message": "An unexpected error occurred. Please try again later." }
    })
)]
pub struct InternalServerErrorResponse(pub DomainErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Business rule violated",
    content_type = "application/json",
    example = json!({
        "error": { "type": "INVALID_EMAIL_FORMAT", "message": "The email address format is invalid." }
    })
)]
pub struct BadRequestResponse(pub DomainErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "name": [{ "code": "length", "message": null, "params": { "min": 1 } }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Identifier is not an integer",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_ID",
        "message": "Identifier must be an integer"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": { "type": "NOT_FOUND", "message": "The requested item could not be found." }
    })
)]
pub struct NotFoundResponse(pub DomainErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - No signed-in session",
    content_type = "application/json",
    example = json!({
        "error": { "type": "UNAUTHENTICATED", "message": "Please sign in to continue." }
    })
)]
pub struct UnauthorizedResponse(pub DomainErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Forbidden - Insufficient permissions or disabled account",
    content_type = "application/json",
    example = json!({
        "error": { "type": "FORBIDDEN", "message": "You do not have permission to perform this action." }
    })
)]
pub struct ForbiddenResponse(pub DomainErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Conflict - Resource already exists",
    content_type = "application/json",
    example = json!({
        "error": { "type": "EMAIL_ALREADY_EXISTS", "message": "This email address is already registered." }
    })
)]
pub struct ConflictResponse(pub DomainErrorBody);
