use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::disc::DiscAssessment;
use super::domain::{LeadIntakeRequest, LeadListing, LeadReceipt, LeadRecord, ListLeadsQuery};
use super::guard::{check_submission, IntakeViolation, ListLimit};
use super::store::{coerce_storage_id, Document, DocumentFilter, DocumentStore, StoreError};
use crate::config::StorageConfig;

/// Intake facade: validates submissions, scores the DISC questionnaire, and talks to the
/// injected document store.
pub struct LeadIntakeService<S> {
    store: Arc<S>,
    collection: String,
}

/// Score and classify the payload's answers and assemble the record to persist.
pub fn build_record(request: LeadIntakeRequest, created_at: DateTime<Utc>) -> LeadRecord {
    let assessment = DiscAssessment::from_answers(request.disc_answers.as_deref());
    LeadRecord::from_submission(request, assessment, created_at)
}

impl<S> LeadIntakeService<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(store: Arc<S>, storage: &StorageConfig) -> Self {
        Self {
            store,
            collection: storage.leads_collection.clone(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Validate, enrich, and persist a submission.
    pub fn submit(&self, request: LeadIntakeRequest) -> Result<LeadReceipt, LeadIntakeError> {
        check_submission(&request)?;

        let record = build_record(request, Utc::now());
        let document: Document = serde_json::from_value(serde_json::to_value(&record)?)?;

        let id = self
            .store
            .insert(&self.collection, document)
            .inspect_err(|error| {
                warn!(%error, collection = %self.collection, "lead insert failed");
            })?;

        info!(
            lead_id = %id,
            disc_tipo = %record.disc_tipo,
            answered = record.disc_scores.total(),
            "lead accepted"
        );

        Ok(LeadReceipt {
            id,
            disc_scores: record.disc_scores,
            disc_tipo: record.disc_tipo,
        })
    }

    /// Fetch stored leads, optionally narrowed to one DISC label.
    pub fn list(&self, query: ListLeadsQuery) -> Result<LeadListing, LeadIntakeError> {
        let limit = ListLimit::new(query.limit)?;

        let filter = match query.disc_tipo {
            Some(label) => DocumentFilter::default().with("disc_tipo", label),
            None => DocumentFilter::default(),
        };

        let mut items = self
            .store
            .query(&self.collection, &filter, limit.get())
            .inspect_err(|error| {
                warn!(%error, collection = %self.collection, "lead query failed");
            })?;
        items.iter_mut().for_each(coerce_storage_id);

        debug!(count = items.len(), limit = limit.get(), "leads listed");
        Ok(LeadListing::new(items))
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum LeadIntakeError {
    #[error(transparent)]
    Validation(#[from] IntakeViolation),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("lead record could not be encoded as a document: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl LeadIntakeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LeadIntakeError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LeadIntakeError::Store(_) | LeadIntakeError::Encoding(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
