//! Life event domain model.
//!
//! # Responsibility
//! - Describe a span of context an incident may be associated with.
//! - Provide day-overlap and display-label helpers for read paths.
//!
//! # Invariants
//! - An event without `end` is ongoing at the instant it is read.
//! - Core code only reads and references life events by id.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Identifier for a life event, owned by whoever created the event.
pub type LifeEventId = String;

const TIME_LABEL_FORMAT: &str = "%H:%M";
const ONGOING_START_LABEL: &str = "Now";

/// Start of a life event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeEventStart {
    At(NaiveDateTime),
    /// Started at an unrecorded moment and still going.
    Ongoing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: LifeEventId,
    pub description: String,
    pub start: LifeEventStart,
    pub end: Option<NaiveDateTime>,
}

impl LifeEvent {
    /// Creates an event with a recorded start and optional end.
    pub fn new(
        id: impl Into<LifeEventId>,
        description: impl Into<String>,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            start: LifeEventStart::At(start),
            end,
        }
    }

    /// Creates an event that is already in progress with no known start.
    pub fn ongoing(id: impl Into<LifeEventId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            start: LifeEventStart::Ongoing,
            end: None,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// Returns whether this event touches `day`.
    ///
    /// Ongoing starts overlap every day; open-ended events overlap every day
    /// from their start onward.
    pub fn overlaps_day(&self, day: NaiveDate) -> bool {
        let starts_before_end_of_day = match self.start {
            LifeEventStart::At(start) => start.date() <= day,
            LifeEventStart::Ongoing => true,
        };
        let ends_after_start_of_day = self.end.map_or(true, |end| end.date() >= day);
        starts_before_end_of_day && ends_after_start_of_day
    }

    /// Card label such as `19:30 – 23:00`, `09:00` or `Now`.
    pub fn time_label(&self) -> String {
        let start = match self.start {
            LifeEventStart::At(start) => start.format(TIME_LABEL_FORMAT).to_string(),
            LifeEventStart::Ongoing => ONGOING_START_LABEL.to_string(),
        };
        match self.end {
            Some(end) => format!("{start} \u{2013} {}", end.format(TIME_LABEL_FORMAT)),
            None => start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LifeEvent;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .expect("valid time")
    }

    #[test]
    fn time_label_formats_ranges_and_ongoing_events() {
        let pub_night = LifeEvent::new("e1", "Pub night", at(14, 19, 30), Some(at(14, 23, 0)));
        assert_eq!(pub_night.time_label(), "19:30 \u{2013} 23:00");

        let open_ended = LifeEvent::new("e2", "Work day", at(14, 9, 0), None);
        assert_eq!(open_ended.time_label(), "09:00");

        let storm = LifeEvent::ongoing("e3", "Storm outside");
        assert_eq!(storm.time_label(), "Now");
        assert!(storm.is_ongoing());
    }

    #[test]
    fn overlaps_day_respects_start_and_end_dates() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date");
        let yesterday_only = LifeEvent::new("a", "a", at(13, 8, 0), Some(at(13, 9, 0)));
        let spanning = LifeEvent::new("b", "b", at(13, 22, 0), Some(at(14, 2, 0)));
        let tomorrow = LifeEvent::new("c", "c", at(15, 8, 0), None);
        let open_since_yesterday = LifeEvent::new("d", "d", at(13, 8, 0), None);

        assert!(!yesterday_only.overlaps_day(day));
        assert!(spanning.overlaps_day(day));
        assert!(!tomorrow.overlaps_day(day));
        assert!(open_since_yesterday.overlaps_day(day));
        assert!(LifeEvent::ongoing("e", "e").overlaps_day(day));
    }
}
