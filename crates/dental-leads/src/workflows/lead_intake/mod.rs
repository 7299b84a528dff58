//! Lead intake for the clinic's questionnaire.
//!
//! Submissions are validated at the boundary, scored with the DISC questionnaire, and handed
//! to an injected [`DocumentStore`]. The HTTP surface lives in [`router`].

pub mod disc;
pub mod domain;
pub mod guard;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use disc::{classify, score, DiscAssessment, DiscDimension, DiscProfile, DiscScores};
pub use domain::{LeadIntakeRequest, LeadListing, LeadReceipt, LeadRecord, ListLeadsQuery};
pub use guard::{IntakeViolation, ListLimit};
pub use router::lead_router;
pub use service::{build_record, LeadIntakeError, LeadIntakeService};
pub use store::{Document, DocumentFilter, DocumentId, DocumentStore, StoreError};
