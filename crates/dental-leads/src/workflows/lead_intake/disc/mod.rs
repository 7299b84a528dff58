//! DISC questionnaire scoring.
//!
//! Answers are single letters (`A`-`D`) that each vote for one behavioral dimension. The
//! scorer tallies votes into a fixed four-field [`DiscScores`] record and the classifier
//! reduces that record to a [`DiscProfile`] label such as `"D"`, `"D+I"`, or `"undefined"`.

mod classifier;
mod scorer;

pub use classifier::classify;
pub use scorer::score;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label stored when no answer was recognized.
pub const UNDEFINED_PROFILE: &str = "undefined";

/// One of the four DISC dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscDimension {
    Dominance,
    Influence,
    Steadiness,
    Conformity,
}

impl DiscDimension {
    pub const ALL: [DiscDimension; 4] = [
        DiscDimension::Dominance,
        DiscDimension::Influence,
        DiscDimension::Steadiness,
        DiscDimension::Conformity,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            DiscDimension::Dominance => "D",
            DiscDimension::Influence => "I",
            DiscDimension::Steadiness => "S",
            DiscDimension::Conformity => "C",
        }
    }

    /// Map a raw questionnaire answer onto its dimension. Case and surrounding whitespace are
    /// ignored; anything outside `A`-`D` yields `None`.
    pub fn from_answer(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "A" => Some(DiscDimension::Dominance),
            "B" => Some(DiscDimension::Influence),
            "C" => Some(DiscDimension::Steadiness),
            "D" => Some(DiscDimension::Conformity),
            _ => None,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dimension| dimension.key() == key)
    }
}

impl fmt::Display for DiscDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Vote tally per dimension. Always carries all four dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscScores {
    #[serde(rename = "D")]
    pub dominance: u32,
    #[serde(rename = "I")]
    pub influence: u32,
    #[serde(rename = "S")]
    pub steadiness: u32,
    #[serde(rename = "C")]
    pub conformity: u32,
}

impl DiscScores {
    pub const fn new(dominance: u32, influence: u32, steadiness: u32, conformity: u32) -> Self {
        Self {
            dominance,
            influence,
            steadiness,
            conformity,
        }
    }

    pub const fn get(&self, dimension: DiscDimension) -> u32 {
        match dimension {
            DiscDimension::Dominance => self.dominance,
            DiscDimension::Influence => self.influence,
            DiscDimension::Steadiness => self.steadiness,
            DiscDimension::Conformity => self.conformity,
        }
    }

    pub fn record(&mut self, dimension: DiscDimension) {
        let slot = match dimension {
            DiscDimension::Dominance => &mut self.dominance,
            DiscDimension::Influence => &mut self.influence,
            DiscDimension::Steadiness => &mut self.steadiness,
            DiscDimension::Conformity => &mut self.conformity,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn iter(&self) -> impl Iterator<Item = (DiscDimension, u32)> + '_ {
        DiscDimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, votes)| votes).sum()
    }

    pub fn profile(&self) -> DiscProfile {
        classify(self)
    }
}

/// Dominant dimension label derived from a [`DiscScores`] tally.
///
/// Serialized as its display string: a single key (`"S"`), tied keys sorted by key and joined
/// with `+` (`"C+D+I+S"`), or `"undefined"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DiscProfile {
    Undefined,
    Dominant(Vec<DiscDimension>),
}

impl DiscProfile {
    /// Build a profile from the dimensions sharing the top score. Keys are sorted
    /// lexicographically and deduplicated; an empty set is `Undefined`.
    pub fn from_dimensions(mut dimensions: Vec<DiscDimension>) -> Self {
        dimensions.sort_by_key(|dimension| dimension.key());
        dimensions.dedup();
        if dimensions.is_empty() {
            DiscProfile::Undefined
        } else {
            DiscProfile::Dominant(dimensions)
        }
    }
}

impl fmt::Display for DiscProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscProfile::Undefined => f.write_str(UNDEFINED_PROFILE),
            DiscProfile::Dominant(dimensions) => {
                for (index, dimension) in dimensions.iter().enumerate() {
                    if index > 0 {
                        f.write_str("+")?;
                    }
                    f.write_str(dimension.key())?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a DISC profile label")]
pub struct InvalidProfileLabel(pub String);

impl FromStr for DiscProfile {
    type Err = InvalidProfileLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == UNDEFINED_PROFILE {
            return Ok(DiscProfile::Undefined);
        }

        let dimensions = value
            .split('+')
            .map(DiscDimension::from_key)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| InvalidProfileLabel(value.to_string()))?;

        Ok(DiscProfile::from_dimensions(dimensions))
    }
}

impl From<DiscProfile> for String {
    fn from(profile: DiscProfile) -> Self {
        profile.to_string()
    }
}

impl TryFrom<String> for DiscProfile {
    type Error = InvalidProfileLabel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Scores and label computed together for one questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscAssessment {
    pub disc_scores: DiscScores,
    pub disc_tipo: DiscProfile,
}

impl DiscAssessment {
    pub fn from_answers<S: AsRef<str>>(answers: Option<&[S]>) -> Self {
        let disc_scores = score(answers);
        let disc_tipo = classify(&disc_scores);
        Self {
            disc_scores,
            disc_tipo,
        }
    }
}
