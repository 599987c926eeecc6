//! The person store interface and its PostgreSQL implementation.

use async_trait::async_trait;
use person_core::lookup::PersonKey;
use person_core::types::PersonId;

use crate::error::StoreError;
use crate::models::person::{CreatePerson, Person, UpdatePerson};
use crate::repositories::PersonRepo;
use crate::DbPool;

/// Single-document operations on the person collection.
///
/// Every keyed operation reports absence as `Ok(None)`. Update and delete
/// are conditional: they act on the matching record, if any, and return it
/// in the same call.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Insert a new person under a freshly generated identifier.
    async fn insert(&self, input: CreatePerson) -> Result<Person, StoreError>;

    async fn find(&self, key: &PersonKey) -> Result<Option<Person>, StoreError>;

    /// Apply `input` to the matching person and return the updated record.
    async fn update(
        &self,
        key: &PersonKey,
        input: UpdatePerson,
    ) -> Result<Option<Person>, StoreError>;

    /// Remove the matching person and return what was removed.
    async fn delete(&self, key: &PersonKey) -> Result<Option<Person>, StoreError>;

    /// Check that the store can serve requests.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release connections. Called once after the server stops.
    async fn close(&self) {}
}

/// [`PersonStore`] backed by the `people` table.
#[derive(Clone)]
pub struct PgPersonStore {
    pool: DbPool,
}

impl PgPersonStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn insert(&self, input: CreatePerson) -> Result<Person, StoreError> {
        let id = PersonId::generate();
        tracing::debug!(%id, "Inserting person");
        Ok(PersonRepo::create(&self.pool, &id, &input).await?)
    }

    async fn find(&self, key: &PersonKey) -> Result<Option<Person>, StoreError> {
        tracing::debug!(%key, "Finding person");
        Ok(PersonRepo::find(&self.pool, key).await?)
    }

    async fn update(
        &self,
        key: &PersonKey,
        input: UpdatePerson,
    ) -> Result<Option<Person>, StoreError> {
        tracing::debug!(%key, "Updating person");
        Ok(PersonRepo::update(&self.pool, key, &input).await?)
    }

    async fn delete(&self, key: &PersonKey) -> Result<Option<Person>, StoreError> {
        tracing::debug!(%key, "Deleting person");
        Ok(PersonRepo::delete(&self.pool, key).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
