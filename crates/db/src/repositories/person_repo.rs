//! Repository for the `people` table.

use person_core::lookup::PersonKey;
use person_core::types::PersonId;
use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age";

/// Row filter for a [`PersonKey`], taking the key as `$1`.
///
/// Name keys target only the earliest-created match so that update and
/// delete touch at most one row.
fn key_filter(key: &PersonKey) -> &'static str {
    match key {
        PersonKey::ById(_) => "id = $1",
        PersonKey::ByName(_) => {
            "id = (SELECT id FROM people WHERE name = $1 ORDER BY created_at, id LIMIT 1)"
        }
    }
}

fn key_value(key: &PersonKey) -> &str {
    match key {
        PersonKey::ById(id) => id.as_str(),
        PersonKey::ByName(name) => name,
    }
}

/// Provides CRUD operations for people.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person under `id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        id: &PersonId,
        input: &CreatePerson,
    ) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people (id, name, age)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id.as_str())
            .bind(input.name.as_deref())
            .bind(input.age)
            .fetch_one(pool)
            .await
    }

    /// Find the person matching `key`.
    pub async fn find(pool: &PgPool, key: &PersonKey) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE {}", key_filter(key));
        sqlx::query_as::<_, Person>(&query)
            .bind(key_value(key))
            .fetch_optional(pool)
            .await
    }

    /// Update the person matching `key`. Only fields present in `input` are
    /// written; a present `None` stores null.
    ///
    /// Returns the post-update row, or `None` if nothing matched.
    pub async fn update(
        pool: &PgPool,
        key: &PersonKey,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE people SET
                name = CASE WHEN $4 THEN $2 ELSE name END,
                age = CASE WHEN $5 THEN $3 ELSE age END
             WHERE {}
             RETURNING {COLUMNS}",
            key_filter(key)
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(key_value(key))
            .bind(input.name.as_ref().and_then(|name| name.as_deref()))
            .bind(input.age.flatten())
            .bind(input.name.is_some())
            .bind(input.age.is_some())
            .fetch_optional(pool)
            .await
    }

    /// Delete the person matching `key`, returning the removed row.
    pub async fn delete(pool: &PgPool, key: &PersonKey) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "DELETE FROM people WHERE {} RETURNING {COLUMNS}",
            key_filter(key)
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(key_value(key))
            .fetch_optional(pool)
            .await
    }
}
