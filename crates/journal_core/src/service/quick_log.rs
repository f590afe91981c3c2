//! Quick-log session state machine.
//!
//! # Responsibility
//! - Own the picker lifecycle: `Closed -> Open -> Closed`.
//! - Keep the life-event selection co-located with the open state.
//! - Build and hand off the commit request on symptom selection.
//!
//! # Invariants
//! - Selection state exists only inside `SessionState::Open`; closing drops it.
//! - `open()` while already open is a no-op and keeps the selection.
//! - `select_symptom()` is the only commit path; it closes the session
//!   whatever the commit outcome is.
//! - A blank symptom is rejected before the gateway and keeps the session open.

use crate::clock::Clock;
use crate::config::QuickLogConfig;
use crate::model::incident::{CommitRequest, CommitValidationError};
use crate::model::life_event::{LifeEvent, LifeEventId};
use crate::repo::incident_repo::IncidentStore;
use crate::repo::life_event_repo::LifeEventProvider;
use crate::service::commit_gateway::{CommitOutcome, LogCommitGateway};
use crate::service::selection::LifeEventSelection;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickLogError {
    /// Operation requires an open session.
    NotOpen,
    /// Selected id is not in the session's candidate snapshot.
    UnknownLifeEvent(LifeEventId),
    /// Commit request failed validation; nothing was sent.
    Validation(CommitValidationError),
}

impl Display for QuickLogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOpen => write!(f, "quick-log session is not open"),
            Self::UnknownLifeEvent(id) => {
                write!(f, "life event is not a candidate in this session: {id}")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for QuickLogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CommitValidationError> for QuickLogError {
    fn from(value: CommitValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Data that only exists while the picker is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSession {
    day: NaiveDate,
    selection: LifeEventSelection,
    candidates: Vec<LifeEvent>,
}

impl OpenSession {
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn selection(&self) -> &LifeEventSelection {
        &self.selection
    }

    pub fn candidates(&self) -> &[LifeEvent] {
        &self.candidates
    }

    fn is_candidate(&self, id: &str) -> bool {
        self.candidates.iter().any(|event| event.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open(OpenSession),
}

/// The single quick-log picker owned by a screen controller.
#[derive(Debug, Clone)]
pub struct QuickLogSession {
    state: SessionState,
    candidate_symptoms: Vec<String>,
}

impl Default for QuickLogSession {
    fn default() -> Self {
        Self::new(&QuickLogConfig::default())
    }
}

impl QuickLogSession {
    /// Creates a closed session with the configured quick symptoms.
    pub fn new(config: &QuickLogConfig) -> Self {
        Self {
            state: SessionState::Closed,
            candidate_symptoms: config.normalized().quick_symptoms,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open(_))
    }

    pub fn candidate_symptoms(&self) -> &[String] {
        &self.candidate_symptoms
    }

    /// Candidate life events snapshot; empty while closed.
    pub fn candidate_life_events(&self) -> &[LifeEvent] {
        match &self.state {
            SessionState::Open(open) => open.candidates(),
            SessionState::Closed => &[],
        }
    }

    /// Day the open picker was opened for.
    pub fn open_day(&self) -> Option<NaiveDate> {
        match &self.state {
            SessionState::Open(open) => Some(open.day),
            SessionState::Closed => None,
        }
    }

    pub fn selected_life_event_id(&self) -> Option<&str> {
        match &self.state {
            SessionState::Open(open) => open.selection.current(),
            SessionState::Closed => None,
        }
    }

    /// Opens the picker for `day` with a fresh selection.
    ///
    /// Returns `false` without touching state when already open. A provider
    /// failure opens the picker with no life-event candidates.
    pub fn open<P: LifeEventProvider>(&mut self, provider: &P, day: NaiveDate) -> bool {
        if self.is_open() {
            debug!("event=quick_log_open module=session status=skipped reason=already_open");
            return false;
        }

        let candidates = match provider.list_active(day) {
            Ok(events) => events,
            Err(err) => {
                warn!(
                    "event=quick_log_open module=session status=degraded error_code=provider_failed error={}",
                    err
                );
                Vec::new()
            }
        };

        info!(
            "event=quick_log_open module=session status=ok day={} candidates={}",
            day,
            candidates.len()
        );
        self.state = SessionState::Open(OpenSession {
            day,
            selection: LifeEventSelection::new(),
            candidates,
        });
        true
    }

    /// Toggles the life-event association and returns the new selection.
    ///
    /// # Errors
    /// - `NotOpen` when the picker is closed.
    /// - `UnknownLifeEvent` when selecting an id outside the candidate
    ///   snapshot. Deselecting the current id is always allowed.
    pub fn toggle_life_event(&mut self, id: &str) -> Result<Option<&str>, QuickLogError> {
        let open = match &mut self.state {
            SessionState::Open(open) => open,
            SessionState::Closed => return Err(QuickLogError::NotOpen),
        };

        if !open.selection.is_selected(id) && !open.is_candidate(id) {
            return Err(QuickLogError::UnknownLifeEvent(id.to_string()));
        }

        let selected = open.selection.toggle(id);
        debug!(
            "event=quick_log_toggle module=session status=ok selected={}",
            selected.is_some()
        );
        Ok(selected)
    }

    /// Replaces the candidate snapshot after a provider push.
    ///
    /// The current selection is kept as intent even if its event is gone.
    pub fn apply_life_event_update(&mut self, events: Vec<LifeEvent>) {
        if let SessionState::Open(open) = &mut self.state {
            debug!(
                "event=quick_log_candidates module=session status=ok candidates={}",
                events.len()
            );
            open.candidates = events;
        }
    }

    /// Commits `symptom` with the current association and closes.
    ///
    /// The session closes whatever the outcome is, so a failed
    /// commit is reported to the caller but never reopens the picker.
    ///
    /// # Errors
    /// - `NotOpen` when the picker is closed.
    /// - `Validation` when the symptom is blank; the session stays open and
    ///   the gateway is not called.
    pub fn select_symptom<S: IncidentStore, C: Clock>(
        &mut self,
        symptom: &str,
        gateway: &LogCommitGateway<S>,
        clock: &C,
    ) -> Result<CommitOutcome, QuickLogError> {
        let open = match &self.state {
            SessionState::Open(open) => open,
            SessionState::Closed => return Err(QuickLogError::NotOpen),
        };

        let request = CommitRequest::new(
            symptom,
            open.selection.current().map(str::to_string),
            clock.now(),
        );
        request.validate()?;

        let outcome = gateway.commit(&request);
        self.close(if outcome.is_committed() {
            "committed"
        } else {
            "commit_failed"
        });
        Ok(outcome)
    }

    /// Abandons the picker without committing.
    ///
    /// Returns whether an open session was dismissed.
    pub fn dismiss(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close("dismissed");
        true
    }

    fn close(&mut self, reason: &str) {
        self.state = SessionState::Closed;
        info!("event=quick_log_close module=session status=ok reason={reason}");
    }
}
