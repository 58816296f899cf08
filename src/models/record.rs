use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use crate::database::store::{Collection, StoredDocument};
use crate::error::{Error, Result};

/// Field set of a record type, stored as the document body.
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: Collection;
    /// Singular, capitalized name used in client messages ("Question").
    const KIND: &'static str;
}

/// A stored record: store-assigned identity and timestamp around the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: T,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl<T: Document> TryFrom<StoredDocument> for Record<T> {
    type Error = Error;

    fn try_from(document: StoredDocument) -> Result<Self> {
        Ok(Self {
            id: document.id,
            fields: serde_json::from_value(document.body)?,
            created_at: document.created_at,
        })
    }
}
