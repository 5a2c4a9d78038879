//! Partial-update merge
//!
//! Each updatable field has a [`MergePolicy`] in [`MERGE_POLICIES`]; the
//! merge consults that table instead of hand-written per-field conditions.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};

use crate::models::{Pet, UpdatePet};

/// When an incoming value replaces the stored one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Replace only with a string that is not blank. Blank means "not supplied".
    IfNonBlank,
    /// Replace whenever the key is present, `null` included.
    IfPresent,
    /// Replace only when an actual value is supplied.
    IfValue,
}

/// Fields of a pet an update may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetField {
    Name,
    Species,
    Breed,
    Age,
    Color,
    Weight,
    Description,
    ImageUrl,
    IsAvailable,
}

impl PetField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetField::Name => "name",
            PetField::Species => "species",
            PetField::Breed => "breed",
            PetField::Age => "age",
            PetField::Color => "color",
            PetField::Weight => "weight",
            PetField::Description => "description",
            PetField::ImageUrl => "imageUrl",
            PetField::IsAvailable => "isAvailable",
        }
    }
}

pub const MERGE_POLICIES: [(PetField, MergePolicy); 9] = [
    (PetField::Name, MergePolicy::IfNonBlank),
    (PetField::Species, MergePolicy::IfNonBlank),
    (PetField::Breed, MergePolicy::IfPresent),
    (PetField::Age, MergePolicy::IfValue),
    (PetField::Color, MergePolicy::IfPresent),
    (PetField::Weight, MergePolicy::IfValue),
    (PetField::Description, MergePolicy::IfPresent),
    (PetField::ImageUrl, MergePolicy::IfPresent),
    (PetField::IsAvailable, MergePolicy::IfValue),
];

/// Policy registered for `field`.
pub fn policy(field: PetField) -> MergePolicy {
    MERGE_POLICIES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, p)| *p)
        .unwrap_or(MergePolicy::IfValue)
}

/// Shape of one incoming field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incoming<'a> {
    Absent,
    Null,
    Text(&'a str),
    Value,
}

impl MergePolicy {
    pub fn accepts(self, incoming: Incoming<'_>) -> bool {
        match (self, incoming) {
            (_, Incoming::Absent) => false,
            (MergePolicy::IfPresent, _) => true,
            (MergePolicy::IfNonBlank, Incoming::Text(s)) => !s.trim().is_empty(),
            (MergePolicy::IfNonBlank | MergePolicy::IfValue, Incoming::Null) => false,
            (MergePolicy::IfNonBlank | MergePolicy::IfValue, _) => true,
        }
    }
}

fn text<T: AsRef<str>>(value: &Option<T>) -> Incoming<'_> {
    match value {
        Some(s) => Incoming::Text(s.as_ref()),
        None => Incoming::Null,
    }
}

fn merge_required(field: PetField, target: &mut String, incoming: Option<String>) -> bool {
    match incoming {
        Some(value) if policy(field).accepts(Incoming::Text(&value)) => {
            *target = value;
            true
        }
        _ => false,
    }
}

fn merge_text(field: PetField, target: &mut Option<String>, incoming: Option<Option<String>>) -> bool {
    match incoming {
        Some(value) if policy(field).accepts(text(&value)) => {
            *target = value;
            true
        }
        _ => false,
    }
}

fn merge_value<T>(field: PetField, target: &mut T, incoming: Option<T>) -> bool {
    match incoming {
        Some(value) if policy(field).accepts(Incoming::Value) => {
            *target = value;
            true
        }
        _ => false,
    }
}

/// Timestamp precision kept by the store.
pub fn stamp(now: DateTime<Utc>) -> DateTime<Utc> {
    now.trunc_subsecs(6)
}

/// Next `updatedAt`: `now`, but always at least one microsecond after `previous`.
pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    stamp(now).max(previous + TimeDelta::microseconds(1))
}

/// Apply `update` to `pet` and refresh `updatedAt`.
///
/// Returns the fields that were overwritten. `id` and `createdAt` are never touched.
pub fn apply_update(pet: &mut Pet, update: UpdatePet, now: DateTime<Utc>) -> Vec<PetField> {
    let mut changed = Vec::new();
    let mut record = |field, applied: bool| {
        if applied {
            changed.push(field);
        }
    };

    record(PetField::Name, merge_required(PetField::Name, &mut pet.name, update.name));
    record(
        PetField::Species,
        merge_required(PetField::Species, &mut pet.species, update.species),
    );
    record(PetField::Breed, merge_text(PetField::Breed, &mut pet.breed, update.breed));
    record(PetField::Age, merge_value(PetField::Age, &mut pet.age, update.age.map(Some)));
    record(PetField::Color, merge_text(PetField::Color, &mut pet.color, update.color));
    record(
        PetField::Weight,
        merge_value(PetField::Weight, &mut pet.weight, update.weight.map(Some)),
    );
    record(
        PetField::Description,
        merge_text(PetField::Description, &mut pet.description, update.description),
    );
    record(
        PetField::ImageUrl,
        merge_text(PetField::ImageUrl, &mut pet.image_url, update.image_url),
    );
    record(
        PetField::IsAvailable,
        merge_value(PetField::IsAvailable, &mut pet.is_available, update.is_available),
    );

    pet.updated_at = next_updated_at(pet.updated_at, now);
    changed
}
