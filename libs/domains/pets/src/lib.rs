//! Pets Domain
//!
//! CRUD for the pet catalog: validation, partial-update merge, persistence
//! and the HTTP handlers on top.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Handlers   │  ← HTTP endpoints, status codes
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │ Orchestrator │  ← Business rules, validation, response envelope
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │   Service    │  ← Create mapping, partial-update merge
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │  Repository  │  ← Data access (trait + in-memory / Postgres)
//! └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_pets::{handlers, InMemoryPetRepository, PetOrchestrator, PetService};
//!
//! let service = PetService::new(InMemoryPetRepository::new());
//! let router = handlers::router(PetOrchestrator::new(service));
//! ```

pub mod entity;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod merge;
pub mod models;
pub mod orchestrator;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use envelope::{ApiResponse, FailureKind, ValidationFailure};
pub use error::{Cancelled, PetError, PetResult};
pub use handlers::ApiDoc;
pub use merge::{MergePolicy, PetField};
pub use models::{CreatePet, ListParams, NewPet, Pet, PetPage, UpdatePet};
pub use orchestrator::PetOrchestrator;
pub use postgres::PgPetRepository;
pub use repository::{InMemoryPetRepository, PetRepository};
pub use service::PetService;
pub use validation::FieldErrors;
