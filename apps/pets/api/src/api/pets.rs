use axum::Router;
use domain_pets::{PetOrchestrator, PetService, PgPetRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgPetRepository::new(state.db.clone());
    let service = PetService::new(repository);
    handlers::router(PetOrchestrator::new(service))
}
