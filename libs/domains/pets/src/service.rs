use chrono::Utc;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::{PetError, PetResult};
use crate::merge::{apply_update, stamp};
use crate::models::{CreatePet, NewPet, Pet, PetPage, UpdatePet};
use crate::repository::PetRepository;

/// Domain service: maps requests onto pets and owns the partial-update merge
///
/// Inputs are assumed validated; see [`crate::orchestrator::PetOrchestrator`].
#[derive(Clone)]
pub struct PetService<R: PetRepository> {
    repository: Arc<R>,
}

impl<R: PetRepository> PetService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a pet by ID
    pub async fn get_pet(&self, id: i32, cancel: &CancellationToken) -> PetResult<Pet> {
        self.repository
            .get_by_id(id, cancel)
            .await?
            .ok_or(PetError::NotFound(id))
    }

    /// One page of pets ordered by id
    pub async fn list_pets(
        &self,
        limit: i32,
        offset: i32,
        cancel: &CancellationToken,
    ) -> PetResult<PetPage> {
        let limit_rows = u64::try_from(limit)
            .map_err(|_| PetError::InvalidArgument(format!("Invalid limit {}", limit)))?;
        let offset_rows = u64::try_from(offset)
            .map_err(|_| PetError::InvalidArgument(format!("Invalid offset {}", offset)))?;

        let pets = self
            .repository
            .get_all(limit_rows, offset_rows, cancel)
            .await?;

        Ok(PetPage {
            count: pets.len(),
            pets,
            limit,
            offset,
        })
    }

    /// Create a pet; `createdAt` and `updatedAt` are both set to now
    pub async fn create_pet(&self, input: CreatePet, cancel: &CancellationToken) -> PetResult<Pet> {
        let pet = NewPet::from_request(input, stamp(Utc::now()));
        let created = self.repository.create(pet, cancel).await?;

        tracing::info!(pet_id = created.id, name = %created.name, "Created pet");
        Ok(created)
    }

    /// Merge the supplied fields into the stored pet
    pub async fn update_pet(
        &self,
        id: i32,
        input: UpdatePet,
        cancel: &CancellationToken,
    ) -> PetResult<Pet> {
        let mut pet = self.get_pet(id, cancel).await?;

        let changed = apply_update(&mut pet, input, Utc::now());
        let fields: Vec<&str> = changed.iter().map(|f| f.as_str()).collect();

        let updated = self
            .repository
            .update(pet, cancel)
            .await?
            .ok_or(PetError::NotFound(id))?;

        tracing::info!(pet_id = id, fields = ?fields, "Updated pet");
        Ok(updated)
    }

    /// Delete a pet
    pub async fn delete_pet(&self, id: i32, cancel: &CancellationToken) -> PetResult<()> {
        if !self.repository.delete(id, cancel).await? {
            return Err(PetError::NotFound(id));
        }

        tracing::info!(pet_id = id, "Deleted pet");
        Ok(())
    }

    /// Check whether a pet exists
    pub async fn pet_exists(&self, id: i32, cancel: &CancellationToken) -> PetResult<bool> {
        self.repository.exists(id, cancel).await
    }
}
