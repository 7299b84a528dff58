use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored JSON document.
pub type Document = Map<String, Value>;

/// Field carrying the store-assigned identity on documents returned by a query.
pub const STORAGE_ID_FIELD: &str = "_id";

/// Opaque identifier assigned by the document store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Field-equality filter. An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    fields: Document,
}

impl DocumentFilter {
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }
}

/// Document store collaborator. Implementations own connection management; the intake
/// service only inserts and queries.
pub trait DocumentStore: Send + Sync {
    fn insert(&self, collection: &str, document: Document) -> Result<DocumentId, StoreError>;
    fn query(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: usize,
    ) -> Result<Vec<Document>, StoreError>;
}

/// Failure reported by the document store. The message is surfaced to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),
}

/// Render the storage id as a plain string so documents serialize uniformly.
///
/// Extended-JSON object ids (`{"$oid": "..."}`) are unwrapped; other non-string ids use
/// their JSON text.
pub fn coerce_storage_id(document: &mut Document) {
    let Some(id) = document.get_mut(STORAGE_ID_FIELD) else {
        return;
    };

    let rendered = match &*id {
        Value::String(_) => return,
        Value::Object(fields) => match fields.get("$oid") {
            Some(Value::String(oid)) => oid.clone(),
            _ => id.to_string(),
        },
        other => other.to_string(),
    };

    *id = Value::String(rendered);
}
