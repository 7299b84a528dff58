use dental_leads::workflows::lead_intake::store::STORAGE_ID_FIELD;
use dental_leads::workflows::lead_intake::{
    Document, DocumentFilter, DocumentId, DocumentStore, StoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct Collections {
    next_id: u64,
    documents: HashMap<String, Vec<Document>>,
}

/// Process-local document store. Ids are sequence numbers shared across collections.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDocumentStore {
    inner: Arc<Mutex<Collections>>,
}

impl DocumentStore for InMemoryDocumentStore {
    fn insert(&self, collection: &str, mut document: Document) -> Result<DocumentId, StoreError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| StoreError::Backend("document store lock poisoned".to_string()))?;

        guard.next_id += 1;
        let id = guard.next_id;
        document.insert(STORAGE_ID_FIELD.to_string(), Value::from(id));
        guard
            .documents
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(DocumentId(id.to_string()))
    }

    fn query(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: usize,
    ) -> Result<Vec<Document>, StoreError> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| StoreError::Backend("document store lock poisoned".to_string()))?;

        Ok(guard
            .documents
            .get(collection)
            .into_iter()
            .flatten()
            .filter(|document| filter.matches(document))
            .take(limit)
            .cloned()
            .collect())
    }
}
