use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::config::StorageConfig;
use crate::workflows::lead_intake::domain::LeadIntakeRequest;
use crate::workflows::lead_intake::store::{
    Document, DocumentFilter, DocumentId, DocumentStore, StoreError, STORAGE_ID_FIELD,
};
use crate::workflows::lead_intake::{lead_router, LeadIntakeService};

pub(super) fn request() -> LeadIntakeRequest {
    LeadIntakeRequest {
        name: "Mariana Costa".to_string(),
        email: Some("mariana@example.com".to_string()),
        phone: Some("+55 11 98888-7777".to_string()),
        primary_reason: Some("Implante".to_string()),
        referral_source: Some("Instagram".to_string()),
        schedule_preference: Some("manha".to_string()),
        had_prior_diagnosis: Some(true),
        diagnosis_details: Some("Perda de um molar".to_string()),
        readiness_to_close: Some(4),
        estimated_budget: Some("5k-10k".to_string()),
        disc_answers: Some(
            ["A", "A", "B", "C"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        ),
    }
}

pub(super) fn request_with_answers(name: &str, answers: &[&str]) -> LeadIntakeRequest {
    LeadIntakeRequest {
        name: name.to_string(),
        disc_answers: Some(answers.iter().map(|answer| answer.to_string()).collect()),
        ..LeadIntakeRequest::default()
    }
}

pub(super) fn request_json() -> Value {
    json!({
        "nome": "Mariana Costa",
        "email": "mariana@example.com",
        "pronto_para_fechar": 4,
        "disc_respostas": ["A", "A", "B", "C"]
    })
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    collections: Arc<Mutex<HashMap<String, Vec<Document>>>>,
}

impl MemoryStore {
    pub(super) fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .expect("store mutex poisoned")
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&self, collection: &str, mut document: Document) -> Result<DocumentId, StoreError> {
        let mut guard = self.collections.lock().expect("store mutex poisoned");
        let documents = guard.entry(collection.to_string()).or_default();
        let id = documents.len() as u64 + 1;
        document.insert(STORAGE_ID_FIELD.to_string(), json!(id));
        documents.push(document);
        Ok(DocumentId(id.to_string()))
    }

    fn query(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: usize,
    ) -> Result<Vec<Document>, StoreError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        Ok(guard
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| filter.matches(document))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

pub(super) struct UnavailableStore;

impl DocumentStore for UnavailableStore {
    fn insert(&self, _collection: &str, _document: Document) -> Result<DocumentId, StoreError> {
        Err(StoreError::Backend("database offline".to_string()))
    }

    fn query(
        &self,
        _collection: &str,
        _filter: &DocumentFilter,
        _limit: usize,
    ) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Backend("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (LeadIntakeService<MemoryStore>, MemoryStore) {
    let store = MemoryStore::default();
    let service = LeadIntakeService::new(Arc::new(store.clone()), &StorageConfig::default());
    (service, store)
}

pub(super) fn router_with_service(service: LeadIntakeService<MemoryStore>) -> axum::Router {
    lead_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
