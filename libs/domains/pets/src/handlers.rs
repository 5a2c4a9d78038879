use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    AppError, IdPath, JsonBody,
    errors::responses::{BadRequestIdResponse, BadRequestJsonResponse, ServiceUnavailableResponse},
};
use std::sync::Arc;
use tokio_util::sync::{CancellationToken, DropGuard};
use utoipa::OpenApi;

use crate::entity;
use crate::envelope::{ErrorEnvelope, PetEnvelope, PetPageEnvelope, ValidationFailure};
use crate::models::{CreatePet, ListParams, Pet, PetPage, UpdatePet};
use crate::orchestrator::PetOrchestrator;
use crate::repository::PetRepository;

/// OpenAPI documentation for Pets API
#[derive(OpenApi)]
#[openapi(
    paths(list_pets, create_pet, get_pet, update_pet, delete_pet),
    components(
        schemas(
            Pet,
            PetPage,
            CreatePet,
            UpdatePet,
            PetEnvelope,
            PetPageEnvelope,
            ErrorEnvelope,
            ValidationFailure
        ),
        responses(BadRequestIdResponse, BadRequestJsonResponse, ServiceUnavailableResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Pet catalog endpoints")
    )
)]
pub struct ApiDoc;

type SharedOrchestrator<R> = Arc<PetOrchestrator<R>>;

/// Create the pet router with all HTTP endpoints
pub fn router<R: PetRepository + 'static>(orchestrator: PetOrchestrator<R>) -> Router {
    let shared = Arc::new(orchestrator);

    Router::new()
        .route("/", get(list_pets).post(create_pet))
        .route("/{id}", get(get_pet).put(update_pet).delete(delete_pet))
        .with_state(shared)
}

/// Token for one request; cancelled when the handler future is dropped.
fn request_token() -> (CancellationToken, DropGuard) {
    let token = CancellationToken::new();
    let guard = token.clone().drop_guard();
    (token, guard)
}

/// List pets
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Page of pets", body = PetPageEnvelope),
        (status = 400, description = "Limit or offset out of range", body = ErrorEnvelope),
        (status = 500, description = "Unexpected failure", body = ErrorEnvelope),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_pets<R: PetRepository>(
    State(orchestrator): State<SharedOrchestrator<R>>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let (cancel, _guard) = request_token();
    let response = orchestrator
        .list_pets(params.limit(), params.offset(), &cancel)
        .await?;
    Ok(response.into_response())
}

/// Create a pet
///
/// A missing or malformed JSON body is rejected with a 400 `INVALID_JSON` error body.
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreatePet,
    responses(
        (status = 201, description = "Pet created", body = PetEnvelope),
        (status = 400, description = "Field validation failed", body = ValidationFailure),
        (status = 500, description = "Unexpected failure", body = ErrorEnvelope),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_pet<R: PetRepository>(
    State(orchestrator): State<SharedOrchestrator<R>>,
    JsonBody(input): JsonBody<CreatePet>,
) -> Result<Response, AppError> {
    let (cancel, _guard) = request_token();
    let response = orchestrator.create_pet(input, &cancel).await?;
    Ok(response.into_response_with(StatusCode::CREATED))
}

/// Get a pet by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 200, description = "Pet found", body = PetEnvelope),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Pet not found", body = ErrorEnvelope),
        (status = 500, description = "Unexpected failure", body = ErrorEnvelope),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_pet<R: PetRepository>(
    State(orchestrator): State<SharedOrchestrator<R>>,
    IdPath(id): IdPath,
) -> Result<Response, AppError> {
    let (cancel, _guard) = request_token();
    let response = orchestrator.get_pet(id, &cancel).await?;
    Ok(response.into_response())
}

/// Update the supplied fields of a pet
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Pet ID")
    ),
    request_body = UpdatePet,
    responses(
        (status = 200, description = "Pet updated", body = PetEnvelope),
        (status = 400, description = "Field validation failed", body = ValidationFailure),
        (status = 404, description = "Pet not found", body = ErrorEnvelope),
        (status = 500, description = "Unexpected failure", body = ErrorEnvelope),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_pet<R: PetRepository>(
    State(orchestrator): State<SharedOrchestrator<R>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdatePet>,
) -> Result<Response, AppError> {
    let (cancel, _guard) = request_token();
    let response = orchestrator.update_pet(id, input, &cancel).await?;
    Ok(response.into_response())
}

/// Delete a pet
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Pet ID")
    ),
    responses(
        (status = 204, description = "Pet deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Pet not found", body = ErrorEnvelope),
        (status = 500, description = "Unexpected failure", body = ErrorEnvelope),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_pet<R: PetRepository>(
    State(orchestrator): State<SharedOrchestrator<R>>,
    IdPath(id): IdPath,
) -> Result<Response, AppError> {
    let (cancel, _guard) = request_token();
    let response = orchestrator.delete_pet(id, &cancel).await?;

    if response.is_success() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(response.into_response())
}
