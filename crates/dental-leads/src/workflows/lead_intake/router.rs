use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use super::domain::{LeadIntakeRequest, LeadListing, LeadReceipt, ListLeadsQuery};
use super::service::LeadIntakeService;
use super::store::DocumentStore;
use crate::error::AppError;

/// Router builder exposing the intake and listing endpoints.
pub fn lead_router<S>(service: Arc<LeadIntakeService<S>>) -> Router
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route("/api/lead-intake", post(intake_handler::<S>))
        .route("/api/leads", get(list_handler::<S>))
        .with_state(service)
}

pub(crate) async fn intake_handler<S>(
    State(service): State<Arc<LeadIntakeService<S>>>,
    Json(request): Json<LeadIntakeRequest>,
) -> Result<Json<LeadReceipt>, AppError>
where
    S: DocumentStore + 'static,
{
    Ok(Json(service.submit(request)?))
}

/// `disc_tipo` must be percent-encoded for tie labels: a raw `+` decodes to a space, so
/// `D+I` is sent as `D%2BI`.
pub(crate) async fn list_handler<S>(
    State(service): State<Arc<LeadIntakeService<S>>>,
    Query(query): Query<ListLeadsQuery>,
) -> Result<Json<LeadListing>, AppError>
where
    S: DocumentStore + 'static,
{
    Ok(Json(service.list(query)?))
}
