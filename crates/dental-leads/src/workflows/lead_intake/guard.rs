use std::ops::RangeInclusive;

use super::domain::LeadIntakeRequest;

pub const READINESS_RANGE: RangeInclusive<i64> = 1..=5;
pub const LIST_LIMIT_RANGE: RangeInclusive<i64> = 1..=100;
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Boundary validation errors. Raised before any scoring or storage happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("pronto_para_fechar must be between 1 and 5 (found {found})")]
    ReadinessOutOfRange { found: i64 },
    #[error("email '{value}' is not a valid address")]
    MalformedEmail { value: String },
    #[error("limit must be between 1 and 100 (found {found})")]
    ListLimitOutOfRange { found: i64 },
}

/// Page size for the listing endpoint, validated against [`LIST_LIMIT_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimit(usize);

impl ListLimit {
    pub fn new(requested: Option<i64>) -> Result<Self, IntakeViolation> {
        let found = requested.unwrap_or(DEFAULT_LIST_LIMIT);
        if !LIST_LIMIT_RANGE.contains(&found) {
            return Err(IntakeViolation::ListLimitOutOfRange { found });
        }
        usize::try_from(found)
            .map(Self)
            .map_err(|_| IntakeViolation::ListLimitOutOfRange { found })
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for ListLimit {
    fn default() -> Self {
        Self(DEFAULT_LIST_LIMIT as usize)
    }
}

/// Check presence/range constraints carried by the intake form.
pub fn check_submission(request: &LeadIntakeRequest) -> Result<(), IntakeViolation> {
    if let Some(found) = request.readiness_to_close {
        if !READINESS_RANGE.contains(&found) {
            return Err(IntakeViolation::ReadinessOutOfRange { found });
        }
    }

    if let Some(email) = request.email.as_deref() {
        if !is_plausible_email(email) {
            return Err(IntakeViolation::MalformedEmail {
                value: email.to_string(),
            });
        }
    }

    Ok(())
}

/// Structural address check: one `@`, a non-empty local part, and a dotted domain with no
/// empty labels.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
    })
}
