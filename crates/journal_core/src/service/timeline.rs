//! Day timeline projection.
//!
//! # Responsibility
//! - Merge a day's incidents with life-event descriptions into render rows.
//! - Derive the most recent incident for "last logged" summaries.
//!
//! # Invariants
//! - Output is non-decreasing by `time`; equal times keep input order.
//! - A life-event id that does not resolve yields no label, never an error.
//! - When several events share an id, the first one provides the label.
//! - Inputs are never mutated; entries are recomputed on every call.

use crate::model::incident::{Incident, IncidentId};
use crate::model::life_event::{LifeEvent, LifeEventId};
use crate::model::valence::{classify, ValenceMarker};
use chrono::NaiveDateTime;
use std::collections::HashMap;

const TIME_LABEL_FORMAT: &str = "%H:%M";

/// One render-ready timeline row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTimelineEntry {
    pub incident_id: IncidentId,
    pub time: NaiveDateTime,
    /// Wall-clock `HH:MM`.
    pub time_label: String,
    pub main_symptom: String,
    pub marker: ValenceMarker,
    pub life_event_id: Option<LifeEventId>,
    /// Resolved description; `None` when unlinked or unresolved.
    pub life_event_label: Option<String>,
}

/// Builds the ordered timeline for one day.
pub fn build_day(incidents: &[Incident], life_events: &[LifeEvent]) -> Vec<DayTimelineEntry> {
    let mut labels: HashMap<&str, &str> = HashMap::new();
    for event in life_events {
        labels
            .entry(event.id.as_str())
            .or_insert(event.description.as_str());
    }

    let mut ordered: Vec<&Incident> = incidents.iter().collect();
    // `sort_by_key` is stable, so simultaneous incidents keep arrival order.
    ordered.sort_by_key(|incident| incident.time);

    ordered
        .into_iter()
        .map(|incident| DayTimelineEntry {
            incident_id: incident.id,
            time: incident.time,
            time_label: incident.time.format(TIME_LABEL_FORMAT).to_string(),
            main_symptom: incident.main_symptom.clone(),
            marker: classify(Some(incident.valence)),
            life_event_id: incident.life_event_id.clone(),
            life_event_label: incident
                .life_event_id
                .as_deref()
                .and_then(|id| labels.get(id))
                .map(|label| label.to_string()),
        })
        .collect()
}

/// Returns the latest incident; the later arrival wins a tie.
pub fn most_recent(incidents: &[Incident]) -> Option<&Incident> {
    incidents.iter().max_by_key(|incident| incident.time)
}
