use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::store::{Collection, DocumentStore, StoredDocument};
use crate::error::Result;

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: Collection, body: JsonValue) -> Result<StoredDocument> {
        let query = format!(
            "INSERT INTO {} (body) VALUES ($1) RETURNING id, body, created_at",
            collection.table()
        );
        let document = sqlx::query_as::<_, StoredDocument>(&query)
            .bind(body)
            .fetch_one(&self.pool)
            .await?;

        Ok(document)
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<StoredDocument>> {
        let query = format!(
            "SELECT id, body, created_at FROM {} ORDER BY created_at DESC, seq DESC",
            collection.table()
        );
        let documents = sqlx::query_as::<_, StoredDocument>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(documents)
    }

    async fn replace(
        &self,
        collection: Collection,
        id: Uuid,
        body: JsonValue,
    ) -> Result<Option<StoredDocument>> {
        let query = format!(
            "UPDATE {} SET body = $2 WHERE id = $1 RETURNING id, body, created_at",
            collection.table()
        );
        let document = sqlx::query_as::<_, StoredDocument>(&query)
            .bind(id)
            .bind(body)
            .fetch_optional(&self.pool)
            .await?;

        Ok(document)
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool> {
        let query = format!("DELETE FROM {} WHERE id = $1", collection.table());
        let res = sqlx::query(&query).bind(id).execute(&self.pool).await?;

        Ok(res.rows_affected() > 0)
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
