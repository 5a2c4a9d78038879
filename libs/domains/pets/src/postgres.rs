use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect,
};
use tokio_util::sync::CancellationToken;

use crate::{
    entity,
    error::PetResult,
    models::{NewPet, Pet},
    repository::{PetRepository, cancellable},
};

/// sea-orm backed PetRepository
#[derive(Clone)]
pub struct PgPetRepository {
    db: DatabaseConnection,
}

impl PgPetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetRepository for PgPetRepository {
    async fn get_by_id(&self, id: i32, cancel: &CancellationToken) -> PetResult<Option<Pet>> {
        cancellable(cancel, async {
            let model = entity::Entity::find_by_id(id).one(&self.db).await?;
            Ok(model.map(Into::into))
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
            let models = entity::Entity::find()
                .order_by_asc(entity::Column::Id)
                .limit(limit)
                .offset(offset)
                .all(&self.db)
                .await?;

            tracing::debug!(limit, offset, rows = models.len(), "Listed pets");
            Ok(models.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn create(&self, pet: NewPet, cancel: &CancellationToken) -> PetResult<Pet> {
        cancellable(cancel, async {
            let active_model: entity::ActiveModel = pet.into();
            let model = active_model.insert(&self.db).await?;

            tracing::debug!(pet_id = model.id, "Inserted pet");
            Ok(model.into())
        })
        .await
    }

    async fn update(&self, pet: Pet, cancel: &CancellationToken) -> PetResult<Option<Pet>> {
        cancellable(cancel, async {
            let pet_id = pet.id;
            let active_model: entity::ActiveModel = pet.into();

            match active_model.update(&self.db).await {
                Ok(model) => {
                    tracing::debug!(pet_id, "Updated pet");
                    Ok(Some(model.into()))
                }
                Err(DbErr::RecordNotUpdated) => {
                    tracing::debug!(pet_id, "Pet vanished before update");
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    async fn delete(&self, id: i32, cancel: &CancellationToken) -> PetResult<bool> {
        cancellable(cancel, async {
            let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

            tracing::debug!(pet_id = id, rows = result.rows_affected, "Deleted pet");
            Ok(result.rows_affected > 0)
        })
        .await
    }

    async fn exists(&self, id: i32, cancel: &CancellationToken) -> PetResult<bool> {
        cancellable(cancel, async {
            let count = entity::Entity::find_by_id(id).count(&self.db).await?;
            Ok(count > 0)
        })
        .await
    }
}
