use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Pets API",
        version = "0.1.0",
        description = "API for managing the pet catalog"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_pets::entity::Model::URL, api = domain_pets::ApiDoc)
    )
)]
pub struct ApiDoc;
