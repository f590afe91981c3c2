//! Boundary that turns a finished quick-log request into a stored incident.
//!
//! # Responsibility
//! - Re-validate the request and forward it to the incident store once.
//! - Report success or failure as a value, never as a fault.
//!
//! # Invariants
//! - No retry: one `commit` call results in at most one `create` call.
//! - A failed commit creates no incident and hands the request back intact.

use crate::model::incident::{CommitRequest, CommitValidationError, Incident};
use crate::repo::incident_repo::IncidentStore;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a commit did not produce an incident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    /// Request failed validation before reaching storage.
    Validation(CommitValidationError),
    /// Incident store call failed.
    StoreUnavailable(RepoError),
}

impl Display for CommitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::StoreUnavailable(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::StoreUnavailable(err) => Some(err),
        }
    }
}

impl From<CommitValidationError> for CommitError {
    fn from(value: CommitValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for CommitError {
    fn from(value: RepoError) -> Self {
        Self::StoreUnavailable(value)
    }
}

/// Result of one commit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(Incident),
    /// Carries the failed request so the host can offer re-entry.
    Failed {
        request: CommitRequest,
        error: CommitError,
    },
}

impl CommitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    pub fn incident(&self) -> Option<&Incident> {
        match self {
            Self::Committed(incident) => Some(incident),
            Self::Failed { .. } => None,
        }
    }
}

/// Log-incident command emitter over an incident store.
pub struct LogCommitGateway<S: IncidentStore> {
    store: S,
}

impl<S: IncidentStore> LogCommitGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access for timeline queries over the same store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sends one request to storage.
    ///
    /// # Side effects
    /// - Emits `incident_commit` log events. Symptom text is never logged.
    pub fn commit(&self, request: &CommitRequest) -> CommitOutcome {
        match self.try_commit(request) {
            Ok(incident) => {
                info!(
                    "event=incident_commit module=gateway status=ok incident_id={} has_life_event={}",
                    incident.id,
                    incident.life_event_id.is_some()
                );
                CommitOutcome::Committed(incident)
            }
            Err(error) => {
                warn!(
                    "event=incident_commit module=gateway status=error error_code={} error={}",
                    error_code(&error),
                    error
                );
                CommitOutcome::Failed {
                    request: request.clone(),
                    error,
                }
            }
        }
    }

    fn try_commit(&self, request: &CommitRequest) -> Result<Incident, CommitError> {
        request.validate()?;
        Ok(self.store.create(request)?)
    }
}

fn error_code(error: &CommitError) -> &'static str {
    match error {
        CommitError::Validation(_) => "validation_failed",
        CommitError::StoreUnavailable(RepoError::Unavailable(_)) => "store_unavailable",
        CommitError::StoreUnavailable(RepoError::InvalidData(_)) => "store_rejected",
    }
}

#[cfg(test)]
mod tests {
    use super::{CommitError, CommitOutcome, LogCommitGateway};
    use crate::model::incident::{CommitRequest, CommitValidationError};
    use crate::repo::incident_repo::InMemoryIncidentStore;
    use chrono::NaiveDate;

    fn request(symptom: &str) -> CommitRequest {
        let time = NaiveDate::from_ymd_opt(2026, 3, 14)
            .and_then(|day| day.and_hms_opt(14, 3, 0))
            .expect("valid time");
        CommitRequest::new(symptom, Some("e2".to_string()), time)
    }

    #[test]
    fn commit_returns_stored_incident() {
        let store = InMemoryIncidentStore::new();
        let gateway = LogCommitGateway::new(&store);

        let outcome = gateway.commit(&request("Intrusive thoughts"));
        let incident = outcome.incident().expect("commit should succeed");
        assert_eq!(incident.main_symptom, "Intrusive thoughts");
        assert_eq!(incident.life_event_id.as_deref(), Some("e2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn invalid_request_never_reaches_store() {
        let store = InMemoryIncidentStore::new();
        let gateway = LogCommitGateway::new(&store);

        let outcome = gateway.commit(&request(""));
        assert!(matches!(
            outcome,
            CommitOutcome::Failed {
                error: CommitError::Validation(CommitValidationError::BlankSymptom),
                ..
            }
        ));
        assert!(store.is_empty());
    }
}
