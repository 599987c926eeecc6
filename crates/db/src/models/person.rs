//! Person entity model and DTOs.

use person_core::fields::{
    lenient_number, lenient_string, patch_number, patch_string, serialize_number,
};
use person_core::types::PersonId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A person row from the `people` table.
///
/// Serializes as `{"_id": ..., "name": ..., "age": ...}`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Person {
    #[serde(rename = "_id")]
    #[sqlx(try_from = "String")]
    pub id: PersonId,
    pub name: Option<String>,
    #[serde(serialize_with = "serialize_number")]
    pub age: Option<f64>,
}

/// DTO for creating a new person. Absent fields are stored as null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePerson {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub age: Option<f64>,
}

/// DTO for updating an existing person.
///
/// The outer `Option` says whether the field was sent: `None` leaves the
/// column unchanged, `Some(None)` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePerson {
    #[serde(default, deserialize_with = "patch_string")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_number")]
    pub age: Option<Option<f64>>,
}

impl Person {
    /// Build the record an insert of `input` under `id` produces.
    pub fn new(id: PersonId, input: CreatePerson) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
        }
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, input: UpdatePerson) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(age) = input.age {
            self.age = age;
        }
    }
}
