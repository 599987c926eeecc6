//! In-process [`PersonStore`].
//!
//! Records live in insertion order, so name lookups see the same "first
//! match" the PostgreSQL store gives. Nothing is persisted.

use async_trait::async_trait;
use person_core::lookup::PersonKey;
use person_core::types::PersonId;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::person::{CreatePerson, Person, UpdatePerson};
use crate::store::PersonStore;

/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc`.
#[derive(Debug, Default)]
pub struct MemoryPersonStore {
    records: RwLock<Vec<Person>>,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn position(records: &[Person], key: &PersonKey) -> Option<usize> {
    match key {
        PersonKey::ById(id) => records.iter().position(|p| &p.id == id),
        PersonKey::ByName(name) => records
            .iter()
            .position(|p| p.name.as_deref() == Some(name.as_str())),
    }
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn insert(&self, input: CreatePerson) -> Result<Person, StoreError> {
        let person = Person::new(PersonId::generate(), input);
        tracing::debug!(id = %person.id, "Inserting person");
        self.records.write().await.push(person.clone());
        Ok(person)
    }

    async fn find(&self, key: &PersonKey) -> Result<Option<Person>, StoreError> {
        let records = self.records.read().await;
        Ok(position(&records, key).map(|i| records[i].clone()))
    }

    async fn update(
        &self,
        key: &PersonKey,
        input: UpdatePerson,
    ) -> Result<Option<Person>, StoreError> {
        let mut records = self.records.write().await;
        let Some(i) = position(&records, key) else {
            return Ok(None);
        };
        records[i].apply(input);
        Ok(Some(records[i].clone()))
    }

    async fn delete(&self, key: &PersonKey) -> Result<Option<Person>, StoreError> {
        let mut records = self.records.write().await;
        Ok(position(&records, key).map(|i| records.remove(i)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
