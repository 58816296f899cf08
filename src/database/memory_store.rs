use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::store::{Collection, DocumentStore, StoredDocument};
use crate::error::Result;
use crate::utils::time;

/// In-process store backing the test suites.
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<StoredDocument>>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: Collection, body: JsonValue) -> Result<StoredDocument> {
        let document = StoredDocument {
            id: Uuid::new_v4(),
            body,
            created_at: time::now(),
        };
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(document.clone());

        Ok(document)
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<StoredDocument>> {
        let guard = self.collections.read().await;
        // Reverse first so the stable sort keeps later inserts ahead on equal timestamps.
        let mut documents: Vec<StoredDocument> = guard
            .get(&collection)
            .map(|docs| docs.iter().rev().cloned().collect())
            .unwrap_or_default();
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(documents)
    }

    async fn replace(
        &self,
        collection: Collection,
        id: Uuid,
        body: JsonValue,
    ) -> Result<Option<StoredDocument>> {
        let mut guard = self.collections.write().await;
        let updated = guard
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .map(|doc| {
                doc.body = body;
                doc.clone()
            });

        Ok(updated)
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool> {
        let mut guard = self.collections.write().await;
        let Some(docs) = guard.get_mut(&collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|doc| doc.id != id);

        Ok(docs.len() < before)
    }

    async fn ping(&self) -> bool {
        true
    }
}
