//! Life-event provider contract and in-memory implementation.
//!
//! # Responsibility
//! - Return the life events a user may associate with a new incident.
//!
//! # Invariants
//! - `list_active` returns an owned snapshot; later edits do not leak into it.

use crate::model::life_event::{LifeEvent, LifeEventId};
use crate::repo::RepoResult;
use chrono::NaiveDate;
use std::cell::RefCell;

/// Read-only source of life events.
pub trait LifeEventProvider {
    /// Events overlapping `day`, in provider order.
    fn list_active(&self, day: NaiveDate) -> RepoResult<Vec<LifeEvent>>;
}

impl<T: LifeEventProvider + ?Sized> LifeEventProvider for &T {
    fn list_active(&self, day: NaiveDate) -> RepoResult<Vec<LifeEvent>> {
        (**self).list_active(day)
    }
}

/// Process-local life-event list.
#[derive(Debug, Default)]
pub struct InMemoryLifeEventProvider {
    events: RefCell<Vec<LifeEvent>>,
}

impl InMemoryLifeEventProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<LifeEvent>) -> Self {
        Self {
            events: RefCell::new(events),
        }
    }

    /// Inserts or replaces an event by id.
    pub fn upsert(&self, event: LifeEvent) {
        let mut events = self.events.borrow_mut();
        match events.iter_mut().find(|existing| existing.id == event.id) {
            Some(existing) => *existing = event,
            None => events.push(event),
        }
    }

    /// Removes an event. Incidents referencing it keep their dangling id.
    pub fn remove(&self, id: &str) -> Option<LifeEvent> {
        let mut events = self.events.borrow_mut();
        let index = events.iter().position(|event| event.id == id)?;
        Some(events.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<LifeEvent> {
        self.events
            .borrow()
            .iter()
            .find(|event| event.id == id)
            .cloned()
    }

    pub fn ids(&self) -> Vec<LifeEventId> {
        self.events.borrow().iter().map(|event| event.id.clone()).collect()
    }
}

impl LifeEventProvider for InMemoryLifeEventProvider {
    fn list_active(&self, day: NaiveDate) -> RepoResult<Vec<LifeEvent>> {
        Ok(self
            .events
            .borrow()
            .iter()
            .filter(|event| event.overlaps_day(day))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryLifeEventProvider, LifeEventProvider};
    use crate::model::life_event::LifeEvent;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .expect("valid time")
    }

    #[test]
    fn list_active_is_a_snapshot() {
        let provider = InMemoryLifeEventProvider::with_events(vec![LifeEvent::new(
            "e2",
            "Work day",
            at(14, 9),
            Some(at(14, 17)),
        )]);
        let day = NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date");

        let snapshot = provider.list_active(day).expect("list should succeed");
        provider.upsert(LifeEvent::ongoing("e3", "Storm outside"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(provider.list_active(day).expect("list").len(), 2);
    }

    #[test]
    fn upsert_replaces_and_remove_drops() {
        let provider = InMemoryLifeEventProvider::new();
        provider.upsert(LifeEvent::ongoing("e1", "Pub night"));
        provider.upsert(LifeEvent::ongoing("e1", "Quiz night"));
        assert_eq!(provider.ids(), vec!["e1".to_string()]);
        assert_eq!(
            provider.get("e1").map(|event| event.description),
            Some("Quiz night".to_string())
        );

        assert!(provider.remove("e1").is_some());
        assert!(provider.remove("e1").is_none());
    }

    #[test]
    fn list_active_excludes_other_days() {
        let provider = InMemoryLifeEventProvider::with_events(vec![
            LifeEvent::new("past", "Yesterday", at(13, 9), Some(at(13, 10))),
            LifeEvent::new("today", "Today", at(14, 9), Some(at(14, 10))),
        ]);
        let day = NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date");
        let ids: Vec<_> = provider
            .list_active(day)
            .expect("list should succeed")
            .into_iter()
            .map(|event| event.id)
            .collect();
        assert_eq!(ids, vec!["today".to_string()]);
    }
}
