use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    Result, StoreError,
    document::{Document, DocumentStore, OrderBy, Record, sort_documents},
};

#[derive(Debug, Default)]
struct State {
    collections: HashMap<String, HashMap<String, Record>>,
    unavailable: bool,
}

/// In-memory document store implementation for testing.
///
/// Stores all collections in memory and provides the same interface as the
/// PostgreSQL implementation, plus a fault switch to simulate an upstream
/// outage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryDocumentStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures every subsequent call to fail as if the store were down.
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.write().await.unavailable = unavailable;
    }

    /// Returns the number of documents in a collection.
    pub async fn document_count(&self, collection: &str) -> usize {
        self.state
            .read()
            .await
            .collections
            .get(collection)
            .map_or(0, HashMap::len)
    }

    /// Clears all collections.
    pub async fn clear(&self) {
        self.state.write().await.collections.clear();
    }

    fn check_available(state: &State) -> Result<()> {
        if state.unavailable {
            return Err(StoreError::Unavailable(
                "simulated store outage".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, collection: &str, order_by: OrderBy) -> Result<Vec<Document>> {
        let state = self.state.read().await;
        Self::check_available(&state)?;

        let mut documents: Vec<Document> = state
            .collections
            .get(collection)
            .into_iter()
            .flatten()
            .map(|(id, record)| Document::new(id.clone(), record.clone()))
            .collect();

        sort_documents(&mut documents, &order_by);
        Ok(documents)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let state = self.state.read().await;
        Self::check_available(&state)?;

        Ok(state
            .collections
            .get(collection)
            .and_then(|records| records.get(id))
            .map(|record| Document::new(id, record.clone())))
    }

    async fn create(&self, collection: &str, record: Record) -> Result<String> {
        let mut state = self.state.write().await;
        Self::check_available(&state)?;

        let id = Uuid::new_v4().simple().to_string();
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), record);

        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, partial: Record) -> Result<()> {
        let mut state = self.state.write().await;
        Self::check_available(&state)?;

        let record = state
            .collections
            .get_mut(collection)
            .and_then(|records| records.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        for (field, value) in partial {
            record.insert(field, value);
        }

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut state = self.state.write().await;
        Self::check_available(&state)?;

        if let Some(records) = state.collections.get_mut(collection) {
            records.remove(id);
        }

        Ok(())
    }
}
