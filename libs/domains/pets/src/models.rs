use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validation::{required, web_scheme};

/// Default page size for list requests
pub const DEFAULT_LIMIT: i32 = 100;
/// Largest page a list request may ask for
pub const MAX_LIMIT: i32 = 1000;

/// A pet as returned to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Store-assigned identifier
    pub id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub color: Option<String>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A pet that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub color: Option<String>,
    pub weight: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPet {
    /// Build from a validated create request, stamping both timestamps with `now`.
    pub fn from_request(input: CreatePet, now: DateTime<Utc>) -> Self {
        Self {
            name: input.name,
            species: input.species,
            breed: input.breed,
            age: input.age,
            color: input.color,
            weight: input.weight,
            description: input.description,
            image_url: input.image_url,
            is_available: input.is_available,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the identifier the store assigned.
    pub fn with_id(self, id: i32) -> Pet {
        Pet {
            id,
            name: self.name,
            species: self.species,
            breed: self.breed,
            age: self.age,
            color: self.color,
            weight: self.weight,
            description: self.description,
            image_url: self.image_url,
            is_available: self.is_available,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn default_available() -> bool {
    true
}

/// Reads an explicit JSON `null` as an empty string so the `required` rule reports it.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Payload for creating a pet
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePet {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "required", message = "Name is required."),
        length(max = 100, message = "Name must be between 1 and 100 characters.")
    )]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "required", message = "Species is required."),
        length(max = 50, message = "Species must be between 1 and 50 characters.")
    )]
    pub species: String,

    #[validate(length(max = 100, message = "Breed must be at most 100 characters."))]
    pub breed: Option<String>,

    #[validate(range(min = 0, max = 50, message = "Age must be between 0 and 50."))]
    pub age: Option<i32>,

    #[validate(length(max = 50, message = "Color must be at most 50 characters."))]
    pub color: Option<String>,

    #[validate(range(min = 0.1, max = 200.0, message = "Weight must be between 0.1 and 200.0."))]
    pub weight: Option<f64>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters."))]
    pub description: Option<String>,

    #[validate(
        length(max = 255, message = "Image URL must be at most 255 characters."),
        url(message = "Image URL must be a valid absolute URL."),
        custom(function = "web_scheme", message = "Image URL must use http, https or ftp.")
    )]
    pub image_url: Option<String>,

    #[serde(default = "default_available")]
    #[schema(default = true)]
    pub is_available: bool,
}

/// Distinguishes an explicit JSON `null` from an absent key.
///
/// Used with `#[serde(default)]`: absent keys stay `None`, `null` becomes `Some(None)`.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Payload for a partial update
///
/// Absent fields are left untouched. For `breed`, `color`, `description`
/// and `imageUrl` an explicit `null` clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePet {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters."))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Species must be between 1 and 50 characters."))]
    pub species: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 100, message = "Breed must be at most 100 characters."))]
    pub breed: Option<Option<String>>,

    #[validate(range(min = 0, max = 50, message = "Age must be between 0 and 50."))]
    pub age: Option<i32>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 50, message = "Color must be at most 50 characters."))]
    pub color: Option<Option<String>>,

    #[validate(range(min = 0.1, max = 200.0, message = "Weight must be between 0.1 and 200.0."))]
    pub weight: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters."))]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    #[validate(
        length(max = 255, message = "Image URL must be at most 255 characters."),
        url(message = "Image URL must be a valid absolute URL."),
        custom(function = "web_scheme", message = "Image URL must use http, https or ftp.")
    )]
    pub image_url: Option<Option<String>>,

    pub is_available: Option<bool>,
}

/// One page of pets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetPage {
    pub pets: Vec<Pet>,
    /// Number of pets in this page, not the size of the table
    pub count: usize,
    pub limit: i32,
    pub offset: i32,
}

/// Raw pagination query
///
/// Values that do not parse as integers fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page size, 1 to 1000 (default 100)
    #[param(value_type = Option<i32>)]
    pub limit: Option<String>,
    /// Number of pets to skip (default 0)
    #[param(value_type = Option<i32>)]
    pub offset: Option<String>,
}

impl ListParams {
    pub fn limit(&self) -> i32 {
        parse_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    pub fn offset(&self) -> i32 {
        parse_or(self.offset.as_deref(), 0)
    }
}

fn parse_or(raw: Option<&str>, default: i32) -> i32 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
