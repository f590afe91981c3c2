//! Incident store contract and in-memory implementation.
//!
//! # Responsibility
//! - Create incidents from validated commit requests.
//! - List a day's incidents in arrival order.
//!
//! # Invariants
//! - `create` must call `CommitRequest::validate()` before storing.
//! - Incident ids are generated here, never by callers.

use crate::model::incident::{CommitRequest, Incident};
use crate::repo::{RepoError, RepoResult};
use chrono::NaiveDate;
use std::cell::RefCell;
use uuid::Uuid;

/// Storage boundary for incidents.
pub trait IncidentStore {
    /// Incidents whose `time` falls on `day`, in arrival order.
    fn list_for_day(&self, day: NaiveDate) -> RepoResult<Vec<Incident>>;
    /// Persists one incident and returns it with its assigned id.
    fn create(&self, request: &CommitRequest) -> RepoResult<Incident>;
}

impl<T: IncidentStore + ?Sized> IncidentStore for &T {
    fn list_for_day(&self, day: NaiveDate) -> RepoResult<Vec<Incident>> {
        (**self).list_for_day(day)
    }

    fn create(&self, request: &CommitRequest) -> RepoResult<Incident> {
        (**self).create(request)
    }
}

/// Process-local incident store.
#[derive(Debug, Default)]
pub struct InMemoryIncidentStore {
    incidents: RefCell<Vec<Incident>>,
}

impl InMemoryIncidentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.incidents.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.borrow().is_empty()
    }
}

impl IncidentStore for InMemoryIncidentStore {
    fn list_for_day(&self, day: NaiveDate) -> RepoResult<Vec<Incident>> {
        Ok(self
            .incidents
            .borrow()
            .iter()
            .filter(|incident| incident.time.date() == day)
            .cloned()
            .collect())
    }

    fn create(&self, request: &CommitRequest) -> RepoResult<Incident> {
        request
            .validate()
            .map_err(|err| RepoError::InvalidData(err.to_string()))?;

        let incident = Incident {
            id: Uuid::new_v4(),
            time: request.time,
            main_symptom: request.symptom.clone(),
            valence: request.effective_valence(),
            life_event_id: request.life_event_id.clone(),
        };
        self.incidents.borrow_mut().push(incident.clone());
        Ok(incident)
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryIncidentStore, IncidentStore};
    use crate::model::incident::CommitRequest;
    use crate::model::valence::Valence;
    use crate::repo::RepoError;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .expect("valid time")
    }

    #[test]
    fn create_assigns_unique_ids_and_neutral_default() {
        let store = InMemoryIncidentStore::new();
        let first = store
            .create(&CommitRequest::new("Heart racing", None, at(14, 9, 12)))
            .expect("create should succeed");
        let second = store
            .create(&CommitRequest::new("Heart racing", None, at(14, 9, 12)))
            .expect("create should succeed");

        assert_ne!(first.id, second.id);
        assert!(!first.id.is_nil());
        assert_eq!(first.valence, Valence::Neutral);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn create_rejects_invalid_request() {
        let store = InMemoryIncidentStore::new();
        let err = store
            .create(&CommitRequest::new("   ", None, at(14, 9, 12)))
            .expect_err("blank symptom must be rejected");
        assert!(matches!(err, RepoError::InvalidData(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn list_for_day_filters_by_date_and_keeps_arrival_order() {
        let store = InMemoryIncidentStore::new();
        for (symptom, time) in [
            ("late", at(14, 21, 17)),
            ("other day", at(13, 10, 0)),
            ("early", at(14, 9, 12)),
        ] {
            store
                .create(&CommitRequest::new(symptom, None, time))
                .expect("create should succeed");
        }

        let day = NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date");
        let listed = store.list_for_day(day).expect("list should succeed");
        let symptoms: Vec<_> = listed.iter().map(|i| i.main_symptom.as_str()).collect();
        assert_eq!(symptoms, vec!["late", "early"]);
    }
}
