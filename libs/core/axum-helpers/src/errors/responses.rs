//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed or missing JSON body",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "Invalid or missing request body",
        "message": "Failed to parse the request body as JSON: EOF while parsing a value at line 1 column 0",
        "code": "INVALID_JSON"
    })
)]
pub struct BadRequestJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Path id is not an integer",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "Invalid ID. Must be an integer.",
        "message": "'abc' is not an integer id",
        "code": "INVALID_ID"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable - Request cancelled before completion",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "Request was cancelled",
        "code": "SERVICE_UNAVAILABLE"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
