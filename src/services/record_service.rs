use std::marker::PhantomData;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::database::store::DocumentStore;
use crate::error::{Error, Result};
use crate::models::question::{Question, QuestionFields};
use crate::models::record::{Document, Record};

/// CRUD over one collection. Each call is a single store operation.
pub struct RecordService<T> {
    store: Arc<dyn DocumentStore>,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Clone for RecordService<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _kind: PhantomData,
        }
    }
}

impl<T: Document> RecordService<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }

    pub fn not_found() -> Error {
        Error::NotFound(format!("{} not found", T::KIND))
    }

    /// Identifiers that are not UUIDs can never resolve.
    pub fn parse_id(raw: &str) -> Result<Uuid> {
        Uuid::parse_str(raw.trim()).map_err(|_| Self::not_found())
    }

    pub async fn create(&self, fields: T) -> Result<Record<T>> {
        let body = serde_json::to_value(&fields)?;
        let document = self.store.insert(T::COLLECTION, body).await?;
        info!(collection = T::COLLECTION.table(), id = %document.id, "record created");
        Record::try_from(document)
    }

    pub async fn list(&self) -> Result<Vec<Record<T>>> {
        self.store
            .find_all(T::COLLECTION)
            .await?
            .into_iter()
            .map(Record::try_from)
            .collect()
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.store.delete(T::COLLECTION, id).await? {
            return Err(Self::not_found());
        }
        info!(collection = T::COLLECTION.table(), %id, "record deleted");
        Ok(())
    }
}

impl RecordService<QuestionFields> {
    /// Replaces all mutable fields; id and creation time are kept.
    pub async fn update(&self, id: Uuid, fields: QuestionFields) -> Result<Question> {
        let body = serde_json::to_value(&fields)?;
        let document = self
            .store
            .replace(QuestionFields::COLLECTION, id, body)
            .await?
            .ok_or_else(Self::not_found)?;
        info!(collection = QuestionFields::COLLECTION.table(), %id, "record updated");
        Record::try_from(document)
    }
}
