//! Uniform response envelope
//!
//! Every orchestrator outcome is an [`ApiResponse`]. It serializes to one of:
//!
//! ```text
//! { "success": true,  "data": ..., "message"?: "..." }
//! { "success": false, "error": "...", "message"?: "..." }
//! { "message": "Validation failed", "errors": { "field": ["...", ...] } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer, ser::SerializeStruct};
use utoipa::ToSchema;

use crate::models::{Pet, PetPage};
use crate::validation::FieldErrors;

pub const VALIDATION_FAILED: &str = "Validation failed";

/// Why a request did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A business rule rejected the arguments (bad id, bad page bounds)
    InvalidArgument,
    /// The target pet does not exist
    NotFound,
    /// Anything else; the cause is logged, never returned
    Unexpected,
}

impl FailureKind {
    pub fn status(self) -> StatusCode {
        match self {
            FailureKind::InvalidArgument => StatusCode::BAD_REQUEST,
            FailureKind::NotFound => StatusCode::NOT_FOUND,
            FailureKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ValidationFailure {
    /// Always "Validation failed"
    pub message: String,
    /// Field name to error messages
    pub errors: FieldErrors,
}

impl ValidationFailure {
    pub fn new(errors: FieldErrors) -> Self {
        Self {
            message: VALIDATION_FAILED.to_string(),
            errors,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success {
        data: T,
        message: Option<String>,
    },
    Failure {
        kind: FailureKind,
        error: String,
        message: Option<String>,
    },
    Invalid(ValidationFailure),
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse::Success {
            data,
            message: None,
        }
    }

    pub fn failure(kind: FailureKind, error: impl Into<String>) -> Self {
        ApiResponse::Failure {
            kind,
            error: error.into(),
            message: None,
        }
    }

    pub fn invalid(errors: FieldErrors) -> Self {
        ApiResponse::Invalid(ValidationFailure::new(errors))
    }

    /// Set the optional human-readable message. No effect on validation failures.
    pub fn with_message(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            ApiResponse::Success { message, .. } | ApiResponse::Failure { message, .. } => {
                *message = Some(text.into());
            }
            ApiResponse::Invalid(_) => {}
        }
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ApiResponse::Failure { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// HTTP status for this outcome, using `ok` for successes.
    pub fn status(&self, ok: StatusCode) -> StatusCode {
        match self {
            ApiResponse::Success { .. } => ok,
            ApiResponse::Failure { kind, .. } => kind.status(),
            ApiResponse::Invalid(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Render with `ok` as the success status.
    pub fn into_response_with(self, ok: StatusCode) -> Response {
        (self.status(ok), Json(self)).into_response()
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ApiResponse::Success { data, message } => {
                let mut s = serializer.serialize_struct("SuccessEnvelope", 3)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("data", data)?;
                match message {
                    Some(m) => s.serialize_field("message", m)?,
                    None => s.skip_field("message")?,
                }
                s.end()
            }
            ApiResponse::Failure { error, message, .. } => {
                let mut s = serializer.serialize_struct("ErrorEnvelope", 3)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("error", error)?;
                match message {
                    Some(m) => s.serialize_field("message", m)?,
                    None => s.skip_field("message")?,
                }
                s.end()
            }
            ApiResponse::Invalid(failure) => failure.serialize(serializer),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        self.into_response_with(StatusCode::OK)
    }
}

// OpenAPI shapes of the envelope; the wire format comes from the Serialize impl above.

/// Success envelope carrying a pet
#[derive(ToSchema)]
pub struct PetEnvelope {
    pub success: bool,
    pub data: Pet,
    pub message: Option<String>,
}

/// Success envelope carrying a page of pets
#[derive(ToSchema)]
pub struct PetPageEnvelope {
    pub success: bool,
    pub data: PetPage,
    pub message: Option<String>,
}

/// Error envelope
#[derive(ToSchema)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serialization() {
        let response = ApiResponse::success(5).with_message("done");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": true, "data": 5, "message": "done"})
        );

        let response = ApiResponse::success("x");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": true, "data": "x"})
        );
    }

    #[test]
    fn test_failure_serialization_hides_kind() {
        let response: ApiResponse<()> =
            ApiResponse::failure(FailureKind::NotFound, "Pet with ID 9 not found.");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": false, "error": "Pet with ID 9 not found."})
        );
    }

    #[test]
    fn test_validation_serialization() {
        let mut errors = FieldErrors::new();
        errors.insert("name".to_string(), vec!["Name is required.".to_string()]);
        let response: ApiResponse<()> = ApiResponse::invalid(errors);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"message": "Validation failed", "errors": {"name": ["Name is required."]}})
        );
    }

    #[test]
    fn test_status_mapping() {
        let ok = ApiResponse::success(1);
        assert_eq!(ok.status(StatusCode::CREATED), StatusCode::CREATED);

        for (kind, status) in [
            (FailureKind::InvalidArgument, StatusCode::BAD_REQUEST),
            (FailureKind::NotFound, StatusCode::NOT_FOUND),
            (FailureKind::Unexpected, StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            let response: ApiResponse<i32> = ApiResponse::failure(kind, "x");
            assert_eq!(response.status(StatusCode::OK), status);
        }

        let invalid: ApiResponse<i32> = ApiResponse::invalid(FieldErrors::new());
        assert_eq!(invalid.status(StatusCode::OK), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_with_message_ignores_validation() {
        let invalid: ApiResponse<i32> = ApiResponse::invalid(FieldErrors::new()).with_message("x");
        assert_eq!(invalid, ApiResponse::invalid(FieldErrors::new()));
    }

    #[test]
    fn test_accessors() {
        let ok = ApiResponse::success(3);
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&3));
        assert_eq!(ok.failure_kind(), None);

        let err: ApiResponse<i32> = ApiResponse::failure(FailureKind::Unexpected, "x");
        assert!(!err.is_success());
        assert_eq!(err.data(), None);
        assert_eq!(err.failure_kind(), Some(FailureKind::Unexpected));
    }
}
