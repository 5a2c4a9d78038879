use axum_helpers::AppError;
use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum PetError {
    #[error("Pet with ID {0} not found.")]
    NotFound(i32),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PetResult<T> = Result<T, PetError>;

impl From<sea_orm::DbErr> for PetError {
    fn from(err: sea_orm::DbErr) -> Self {
        PetError::Database(err.to_string())
    }
}

/// The caller's cancellation token fired before the operation finished.
///
/// The only failure an orchestrator operation returns; everything else is an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Request was cancelled")]
pub struct Cancelled;

impl From<Cancelled> for AppError {
    fn from(err: Cancelled) -> Self {
        AppError::ServiceUnavailable(err.to_string())
    }
}
