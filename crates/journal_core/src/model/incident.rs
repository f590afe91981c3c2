//! Incident domain model and the commit request that creates it.
//!
//! # Responsibility
//! - Define the immutable record of one logged symptom moment.
//! - Define the request shape handed from a quick-log session to storage.
//!
//! # Invariants
//! - `Incident::id` is assigned by the storage boundary, never by callers.
//! - A `CommitRequest` must pass `validate()` before it reaches a store.
//! - `life_event_id` is a weak reference; it may not resolve later.

use crate::model::life_event::LifeEventId;
use crate::model::valence::Valence;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Stable identifier for a committed incident.
pub type IncidentId = Uuid;

/// One recorded symptom moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    /// Local wall-clock time of the moment.
    pub time: NaiveDateTime,
    pub main_symptom: String,
    pub valence: Valence,
    pub life_event_id: Option<LifeEventId>,
}

/// Request emitted when a quick-log session commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRequest {
    pub symptom: String,
    pub life_event_id: Option<LifeEventId>,
    pub time: NaiveDateTime,
    /// Left empty by the quick-log picker; stores fall back to `Neutral`.
    pub valence: Option<Valence>,
}

impl CommitRequest {
    /// Builds a request with normalized symptom text and no valence.
    pub fn new(
        symptom: &str,
        life_event_id: Option<LifeEventId>,
        time: NaiveDateTime,
    ) -> Self {
        Self {
            symptom: normalize_symptom(symptom),
            life_event_id,
            time,
            valence: None,
        }
    }

    /// Checks request invariants before any storage call.
    pub fn validate(&self) -> Result<(), CommitValidationError> {
        if self.symptom.trim().is_empty() {
            return Err(CommitValidationError::BlankSymptom);
        }
        if let Some(id) = &self.life_event_id {
            if id.trim().is_empty() {
                return Err(CommitValidationError::BlankLifeEventId);
            }
        }
        Ok(())
    }

    /// Valence a store should persist for this request.
    pub fn effective_valence(&self) -> Valence {
        self.valence.unwrap_or_default()
    }
}

/// Validation failures for commit requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitValidationError {
    /// Symptom text is empty after normalization.
    BlankSymptom,
    /// Life-event association is present but blank.
    BlankLifeEventId,
}

impl Display for CommitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankSymptom => write!(f, "symptom must not be blank"),
            Self::BlankLifeEventId => write!(f, "life event id must not be blank when set"),
        }
    }
}

impl Error for CommitValidationError {}

/// Collapses whitespace runs and trims symptom text.
pub fn normalize_symptom(value: &str) -> String {
    WHITESPACE_RE.replace_all(value, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::{normalize_symptom, CommitRequest, CommitValidationError};
    use crate::model::valence::Valence;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .and_then(|day| day.and_hms_opt(hour, minute, 0))
            .expect("valid time")
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_symptom("  Heart \n  racing\t"), "Heart racing");
    }

    #[test]
    fn blank_symptom_fails_validation() {
        let request = CommitRequest::new(" \t ", None, at(9, 12));
        assert_eq!(request.validate(), Err(CommitValidationError::BlankSymptom));
    }

    #[test]
    fn blank_life_event_id_fails_validation() {
        let request = CommitRequest::new("Heart racing", Some("  ".to_string()), at(9, 12));
        assert_eq!(
            request.validate(),
            Err(CommitValidationError::BlankLifeEventId)
        );
    }

    #[test]
    fn missing_valence_defaults_to_neutral() {
        let mut request = CommitRequest::new("Heart racing", None, at(9, 12));
        assert_eq!(request.effective_valence(), Valence::Neutral);
        request.valence = Some(Valence::Mixed);
        assert_eq!(request.effective_valence(), Valence::Mixed);
    }
}
