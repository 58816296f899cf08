use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Questions,
    TestTakers,
    TestSubmissions,
}

impl Collection {
    pub fn table(self) -> &'static str {
        match self {
            Collection::Questions => "questions",
            Collection::TestTakers => "test_takers",
            Collection::TestSubmissions => "test_submissions",
        }
    }

    /// Plural name used in client-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Collection::Questions => "questions",
            Collection::TestTakers => "test takers",
            Collection::TestSubmissions => "test submissions",
        }
    }
}

/// A record as the store hands it back: the store owns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StoredDocument {
    pub id: Uuid,
    pub body: JsonValue,
    pub created_at: DateTime<Utc>,
}

/// Single-document persistence over named collections.
///
/// Every method is exactly one round trip. `find_all` returns newest records
/// first; records sharing a timestamp come back in reverse insertion order.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, collection: Collection, body: JsonValue) -> Result<StoredDocument>;

    async fn find_all(&self, collection: Collection) -> Result<Vec<StoredDocument>>;

    /// Replaces the body of `id`, keeping its id and timestamp. `None` if absent.
    async fn replace(
        &self,
        collection: Collection,
        id: Uuid,
        body: JsonValue,
    ) -> Result<Option<StoredDocument>>;

    /// Returns `false` if nothing was deleted.
    async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool>;

    async fn ping(&self) -> bool;
}
