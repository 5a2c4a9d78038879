use async_trait::async_trait;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::error::{PetError, PetResult};
use crate::models::{NewPet, Pet};

/// Repository trait for Pet persistence
///
/// Every method races the caller's `cancel` token and returns
/// [`PetError::Cancelled`] if it fires first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Get a pet by ID
    async fn get_by_id(&self, id: i32, cancel: &CancellationToken) -> PetResult<Option<Pet>>;

    /// List pets ordered by id
    async fn get_all(&self, limit: u64, offset: u64, cancel: &CancellationToken)
    -> PetResult<Vec<Pet>>;

    /// Insert a pet; the store assigns the id
    async fn create(&self, pet: NewPet, cancel: &CancellationToken) -> PetResult<Pet>;

    /// Overwrite an existing pet. `None` if it no longer exists.
    async fn update(&self, pet: Pet, cancel: &CancellationToken) -> PetResult<Option<Pet>>;

    /// Delete a pet by ID. `false` if there was nothing to delete.
    async fn delete(&self, id: i32, cancel: &CancellationToken) -> PetResult<bool>;

    /// Check whether a pet exists
    async fn exists(&self, id: i32, cancel: &CancellationToken) -> PetResult<bool>;
}

/// Run `operation` unless `cancel` fires first.
pub async fn cancellable<T, F>(cancel: &CancellationToken, operation: F) -> PetResult<T>
where
    F: Future<Output = PetResult<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(PetError::Cancelled),
        result = operation => result,
    }
}

#[derive(Debug, Default)]
struct Store {
    pets: BTreeMap<i32, Pet>,
    last_id: i32,
}

/// In-memory implementation of PetRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryPetRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn get_by_id(&self, id: i32, cancel: &CancellationToken) -> PetResult<Option<Pet>> {
        cancellable(cancel, async {
            let store = self.store.read().await;
            Ok(store.pets.get(&id).cloned())
        })
        .await
    }

    async fn get_all(
        &self,
        limit: u64,
        offset: u64,
        cancel: &CancellationToken,
    ) -> PetResult<Vec<Pet>> {
        cancellable(cancel, async {
            let store = self.store.read().await;
            Ok(store
                .pets
                .values()
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        })
        .await
    }

    async fn create(&self, pet: NewPet, cancel: &CancellationToken) -> PetResult<Pet> {
        cancellable(cancel, async {
            let mut store = self.store.write().await;
            store.last_id = store
                .last_id
                .checked_add(1)
                .ok_or_else(|| PetError::Internal("pet id space exhausted".to_string()))?;

            let pet = pet.with_id(store.last_id);
            store.pets.insert(pet.id, pet.clone());

            tracing::debug!(pet_id = pet.id, "Inserted pet");
            Ok(pet)
        })
        .await
    }

    async fn update(&self, pet: Pet, cancel: &CancellationToken) -> PetResult<Option<Pet>> {
        cancellable(cancel, async {
            let mut store = self.store.write().await;
            let Some(existing) = store.pets.get_mut(&pet.id) else {
                return Ok(None);
            };

            *existing = Pet {
                created_at: existing.created_at,
                ..pet
            };

            tracing::debug!(pet_id = existing.id, "Updated pet");
            Ok(Some(existing.clone()))
        })
        .await
    }

    async fn delete(&self, id: i32, cancel: &CancellationToken) -> PetResult<bool> {
        cancellable(cancel, async {
            let mut store = self.store.write().await;
            let removed = store.pets.remove(&id).is_some();

            tracing::debug!(pet_id = id, removed, "Deleted pet");
            Ok(removed)
        })
        .await
    }

    async fn exists(&self, id: i32, cancel: &CancellationToken) -> PetResult<bool> {
        cancellable(cancel, async {
            let store = self.store.read().await;
            Ok(store.pets.contains_key(&id))
        })
        .await
    }
}
