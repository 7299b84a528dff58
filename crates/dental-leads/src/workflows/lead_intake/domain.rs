use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::disc::{DiscAssessment, DiscProfile, DiscScores};
use super::store::{Document, DocumentId};

/// Questionnaire payload submitted by a prospective patient.
///
/// Wire names follow the clinic's intake form. Only `nome` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadIntakeRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "motivo_principal", default)]
    pub primary_reason: Option<String>,
    #[serde(rename = "como_conheceu", default)]
    pub referral_source: Option<String>,
    #[serde(rename = "preferencia_horario", default)]
    pub schedule_preference: Option<String>,
    #[serde(rename = "teve_diagnostico_previo", default)]
    pub had_prior_diagnosis: Option<bool>,
    #[serde(rename = "detalhes_diagnostico", default)]
    pub diagnosis_details: Option<String>,
    /// Readiness to close on a 1-5 scale.
    #[serde(rename = "pronto_para_fechar", default)]
    pub readiness_to_close: Option<i64>,
    #[serde(rename = "orcamento_estimado", default)]
    pub estimated_budget: Option<String>,
    /// Raw DISC answers, expected to be `A`-`D`.
    #[serde(rename = "disc_respostas", default)]
    pub disc_answers: Option<Vec<String>>,
}

/// Enriched lead as persisted in the document store. Built once per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "motivo_principal")]
    pub primary_reason: Option<String>,
    #[serde(rename = "como_conheceu")]
    pub referral_source: Option<String>,
    #[serde(rename = "preferencia_horario")]
    pub schedule_preference: Option<String>,
    #[serde(rename = "teve_diagnostico_previo")]
    pub had_prior_diagnosis: Option<bool>,
    #[serde(rename = "detalhes_diagnostico")]
    pub diagnosis_details: Option<String>,
    #[serde(rename = "pronto_para_fechar")]
    pub readiness_to_close: Option<i64>,
    #[serde(rename = "orcamento_estimado")]
    pub estimated_budget: Option<String>,
    #[serde(rename = "disc_respostas")]
    pub disc_answers: Vec<String>,
    pub disc_scores: DiscScores,
    pub disc_tipo: DiscProfile,
    pub created_at: DateTime<Utc>,
}

impl LeadRecord {
    /// Copy the payload verbatim and attach the computed assessment.
    pub fn from_submission(
        request: LeadIntakeRequest,
        assessment: DiscAssessment,
        created_at: DateTime<Utc>,
    ) -> Self {
        let LeadIntakeRequest {
            name,
            email,
            phone,
            primary_reason,
            referral_source,
            schedule_preference,
            had_prior_diagnosis,
            diagnosis_details,
            readiness_to_close,
            estimated_budget,
            disc_answers,
        } = request;

        Self {
            name,
            email,
            phone,
            primary_reason,
            referral_source,
            schedule_preference,
            had_prior_diagnosis,
            diagnosis_details,
            readiness_to_close,
            estimated_budget,
            disc_answers: disc_answers.unwrap_or_default(),
            disc_scores: assessment.disc_scores,
            disc_tipo: assessment.disc_tipo,
            created_at,
        }
    }
}

/// Write-path response: the stored id plus the computed assessment, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub id: DocumentId,
    pub disc_scores: DiscScores,
    pub disc_tipo: DiscProfile,
}

/// Query string accepted by the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListLeadsQuery {
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub disc_tipo: Option<String>,
}

/// Listing response with storage ids already rendered as strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadListing {
    pub items: Vec<Document>,
    pub count: usize,
}

impl LeadListing {
    pub fn new(items: Vec<Document>) -> Self {
        let count = items.len();
        Self { items, count }
    }
}
