//! Home screen controller.
//!
//! # Responsibility
//! - Own the single quick-log session and its collaborators.
//! - Forward user intents (log now, toggle, pick symptom, dismiss).
//! - Project the day summary: last logged, life-event cards, timeline.
//!
//! # Invariants
//! - Exactly one session exists per controller; there is no global session.
//! - Summary reads never mutate the session.

use crate::clock::Clock;
use crate::config::QuickLogConfig;
use crate::model::incident::CommitRequest;
use crate::model::life_event::{LifeEvent, LifeEventId};
use crate::repo::incident_repo::IncidentStore;
use crate::repo::life_event_repo::LifeEventProvider;
use crate::repo::RepoResult;
use crate::service::commit_gateway::{CommitOutcome, LogCommitGateway};
use crate::service::quick_log::{QuickLogError, QuickLogSession};
use crate::service::timeline::{build_day, most_recent, DayTimelineEntry};
use chrono::NaiveDate;
use log::{info, warn};

const EMPTY_TIMELINE_NOTICE: &str = "Nothing logged yet today.";
const EMPTY_LAST_LOGGED_NOTICE: &str = "Nothing yet today. Start with a quick log.";

/// "Last logged" card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastLogged {
    pub entry: DayTimelineEntry,
}

impl LastLogged {
    /// Text such as `14:03 · Intrusive thoughts (At home)`.
    pub fn summary_text(&self) -> String {
        let mut text = format!(
            "{} \u{00B7} {}",
            self.entry.time_label, self.entry.main_symptom
        );
        if let Some(label) = &self.entry.life_event_label {
            text.push_str(&format!(" ({label})"));
        }
        text
    }
}

/// Life-event summary card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeEventCard {
    pub id: LifeEventId,
    pub description: String,
    pub time_label: String,
}

impl From<&LifeEvent> for LifeEventCard {
    fn from(event: &LifeEvent) -> Self {
        Self {
            id: event.id.clone(),
            description: event.description.clone(),
            time_label: event.time_label(),
        }
    }
}

/// Everything the home view renders for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day: NaiveDate,
    pub last_logged: Option<LastLogged>,
    pub life_events: Vec<LifeEventCard>,
    pub timeline: Vec<DayTimelineEntry>,
}

impl DaySummary {
    pub fn empty_notice(&self) -> Option<&'static str> {
        self.timeline.is_empty().then_some(EMPTY_TIMELINE_NOTICE)
    }

    pub fn last_logged_text(&self) -> String {
        self.last_logged
            .as_ref()
            .map_or_else(|| EMPTY_LAST_LOGGED_NOTICE.to_string(), LastLogged::summary_text)
    }
}

/// Screen controller over a provider, an incident store and a clock.
pub struct HomeScreen<P: LifeEventProvider, S: IncidentStore, C: Clock> {
    session: QuickLogSession,
    provider: P,
    gateway: LogCommitGateway<S>,
    clock: C,
}

impl<P: LifeEventProvider, S: IncidentStore, C: Clock> HomeScreen<P, S, C> {
    pub fn new(config: &QuickLogConfig, provider: P, store: S, clock: C) -> Self {
        Self {
            session: QuickLogSession::new(config),
            provider,
            gateway: LogCommitGateway::new(store),
            clock,
        }
    }

    pub fn session(&self) -> &QuickLogSession {
        &self.session
    }

    /// Opens the quick-log picker for the clock's current day.
    pub fn log_now(&mut self) -> bool {
        let day = self.clock.now().date();
        self.session.open(&self.provider, day)
    }

    pub fn toggle_life_event(&mut self, id: &str) -> Result<Option<&str>, QuickLogError> {
        self.session.toggle_life_event(id)
    }

    pub fn select_symptom(&mut self, symptom: &str) -> Result<CommitOutcome, QuickLogError> {
        self.session
            .select_symptom(symptom, &self.gateway, &self.clock)
    }

    pub fn dismiss(&mut self) -> bool {
        self.session.dismiss()
    }

    /// Re-reads the provider for the open session's day and replaces its
    /// candidates. Returns `Ok(false)` when no session is open.
    ///
    /// # Errors
    /// - Provider read failure; the open snapshot is left as it was.
    pub fn refresh_life_events(&mut self) -> RepoResult<bool> {
        let Some(day) = self.session.open_day() else {
            return Ok(false);
        };
        let events = self.provider.list_active(day)?;
        self.session.apply_life_event_update(events);
        Ok(true)
    }

    /// Builds the home view for `day`.
    ///
    /// A provider failure degrades to no life-event cards and unlabeled
    /// timeline rows.
    ///
    /// # Errors
    /// - Propagates incident store read failures.
    pub fn day_summary(&self, day: NaiveDate) -> RepoResult<DaySummary> {
        let incidents = self.gateway.store().list_for_day(day)?;
        let life_events = match self.provider.list_active(day) {
            Ok(events) => events,
            Err(err) => {
                warn!(
                    "event=day_summary module=home status=degraded error_code=provider_failed error={}",
                    err
                );
                Vec::new()
            }
        };
        let timeline = build_day(&incidents, &life_events);
        let last_logged = most_recent(&incidents).and_then(|latest| {
            timeline
                .iter()
                .find(|entry| entry.incident_id == latest.id)
                .cloned()
                .map(|entry| LastLogged { entry })
        });

        Ok(DaySummary {
            day,
            last_logged,
            life_events: life_events.iter().map(LifeEventCard::from).collect(),
            timeline,
        })
    }

    /// Re-logs the most recent incident of `day` at the current time.
    ///
    /// Returns `Ok(None)` when nothing was logged that day. Bypasses the
    /// picker, so an open session is left untouched.
    pub fn log_same_again(&self, day: NaiveDate) -> RepoResult<Option<CommitOutcome>> {
        let incidents = self.gateway.store().list_for_day(day)?;
        let Some(latest) = most_recent(&incidents) else {
            info!("event=log_same_again module=home status=skipped reason=no_incidents");
            return Ok(None);
        };

        let mut request = CommitRequest::new(
            &latest.main_symptom,
            latest.life_event_id.clone(),
            self.clock.now(),
        );
        request.valence = Some(latest.valence);
        Ok(Some(self.gateway.commit(&request)))
    }
}
