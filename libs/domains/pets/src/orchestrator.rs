//! Request orchestrator
//!
//! Applies business rules (id positivity, page bounds) and field validation on
//! top of [`PetService`], then folds every outcome into an [`ApiResponse`].
//! Only cancellation escapes as an error.

use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::envelope::{ApiResponse, FailureKind};
use crate::error::{Cancelled, PetError, PetResult};
use crate::models::{CreatePet, MAX_LIMIT, Pet, PetPage, UpdatePet};
use crate::repository::PetRepository;
use crate::service::PetService;
use crate::validation::{FieldErrors, validate_create, validate_update};

pub const INVALID_ID: &str = "Invalid pet ID. Must be a positive integer.";
pub const INVALID_LIMIT: &str = "Invalid limit. Must be between 1 and 1000.";
pub const INVALID_OFFSET: &str = "Invalid offset. Must be 0 or greater.";

pub type OperationResult<T> = Result<ApiResponse<T>, Cancelled>;

fn ensure_positive_id(id: i32) -> PetResult<()> {
    if id <= 0 {
        return Err(PetError::InvalidArgument(INVALID_ID.to_string()));
    }
    Ok(())
}

fn ensure_page_bounds(limit: i32, offset: i32) -> PetResult<()> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(PetError::InvalidArgument(INVALID_LIMIT.to_string()));
    }
    if offset < 0 {
        return Err(PetError::InvalidArgument(INVALID_OFFSET.to_string()));
    }
    Ok(())
}

fn ensure_valid(errors: FieldErrors) -> PetResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(PetError::Validation(errors))
    }
}

/// Fold a service result into an envelope.
///
/// `unexpected` is the generic error returned in place of storage or internal
/// failures; the real cause only goes to the log.
fn respond<T>(
    result: PetResult<T>,
    success_message: Option<&str>,
    unexpected: &str,
) -> OperationResult<T> {
    match result {
        Ok(data) => {
            let response = ApiResponse::success(data);
            Ok(match success_message {
                Some(message) => response.with_message(message),
                None => response,
            })
        }
        Err(PetError::Cancelled) => Err(Cancelled),
        Err(PetError::Validation(errors)) => Ok(ApiResponse::invalid(errors)),
        Err(PetError::InvalidArgument(message)) => {
            Ok(ApiResponse::failure(FailureKind::InvalidArgument, message))
        }
        Err(err @ PetError::NotFound(_)) => {
            Ok(ApiResponse::failure(FailureKind::NotFound, err.to_string()))
        }
        Err(err @ (PetError::Database(_) | PetError::Internal(_))) => {
            tracing::error!(error = %err, "{}", unexpected);
            Ok(ApiResponse::failure(FailureKind::Unexpected, unexpected))
        }
    }
}

/// Entry point for every pet operation
pub struct PetOrchestrator<R: PetRepository> {
    service: PetService<R>,
}

impl<R: PetRepository> PetOrchestrator<R> {
    pub fn new(service: PetService<R>) -> Self {
        Self { service }
    }

    #[instrument(skip(self, cancel))]
    pub async fn get_pet(&self, id: i32, cancel: &CancellationToken) -> OperationResult<Pet> {
        let result = async {
            ensure_positive_id(id)?;
            self.service.get_pet(id, cancel).await
        }
        .await;

        respond(result, None, "An error occurred while retrieving the pet.")
    }

    #[instrument(skip(self, cancel))]
    pub async fn list_pets(
        &self,
        limit: i32,
        offset: i32,
        cancel: &CancellationToken,
    ) -> OperationResult<PetPage> {
        let result = async {
            ensure_page_bounds(limit, offset)?;
            self.service.list_pets(limit, offset, cancel).await
        }
        .await;

        respond(result, None, "An error occurred while retrieving pets.")
    }

    #[instrument(skip(self, input, cancel), fields(name = %input.name))]
    pub async fn create_pet(
        &self,
        input: CreatePet,
        cancel: &CancellationToken,
    ) -> OperationResult<Pet> {
        let result = async {
            ensure_valid(validate_create(&input))?;
            self.service.create_pet(input, cancel).await
        }
        .await;

        respond(
            result,
            Some("Pet created successfully."),
            "An error occurred while creating the pet.",
        )
    }

    #[instrument(skip(self, input, cancel))]
    pub async fn update_pet(
        &self,
        id: i32,
        input: UpdatePet,
        cancel: &CancellationToken,
    ) -> OperationResult<Pet> {
        let result = async {
            ensure_positive_id(id)?;
            ensure_valid(validate_update(&input))?;
            self.service.update_pet(id, input, cancel).await
        }
        .await;

        respond(
            result,
            Some("Pet updated successfully."),
            "An error occurred while updating the pet.",
        )
    }

    #[instrument(skip(self, cancel))]
    pub async fn delete_pet(&self, id: i32, cancel: &CancellationToken) -> OperationResult<bool> {
        let result = async {
            ensure_positive_id(id)?;
            self.service.delete_pet(id, cancel).await.map(|()| true)
        }
        .await;

        respond(
            result,
            Some("Pet deleted successfully."),
            "An error occurred while deleting the pet.",
        )
    }
}
