use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{NewPet, Pet};

/// Sea-ORM Entity for the pets table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub color: Option<String>,
    pub weight: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// OpenAPI tag shared by every pets endpoint
    pub const TAG: &'static str = "Pets";
    /// Mount point of the pets router below `/api`
    pub const URL: &'static str = "/pets";
}

impl From<Model> for Pet {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            species: model.species,
            breed: model.breed,
            age: model.age,
            color: model.color,
            weight: model.weight,
            description: model.description,
            image_url: model.image_url,
            is_available: model.is_available,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// id is left to the SERIAL column
impl From<NewPet> for ActiveModel {
    fn from(pet: NewPet) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(pet.name),
            species: Set(pet.species),
            breed: Set(pet.breed),
            age: Set(pet.age),
            color: Set(pet.color),
            weight: Set(pet.weight),
            description: Set(pet.description),
            image_url: Set(pet.image_url),
            is_available: Set(pet.is_available),
            created_at: Set(pet.created_at.into()),
            updated_at: Set(pet.updated_at.into()),
        }
    }
}

// Every column except created_at is written back on update
impl From<Pet> for ActiveModel {
    fn from(pet: Pet) -> Self {
        ActiveModel {
            id: Set(pet.id),
            name: Set(pet.name),
            species: Set(pet.species),
            breed: Set(pet.breed),
            age: Set(pet.age),
            color: Set(pet.color),
            weight: Set(pet.weight),
            description: Set(pet.description),
            image_url: Set(pet.image_url),
            is_available: Set(pet.is_available),
            created_at: NotSet,
            updated_at: Set(pet.updated_at.into()),
        }
    }
}
