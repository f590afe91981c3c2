//! Core logic for the journal home screen.
//! Owns the quick-log state machine and the day timeline; storage and UI stay outside.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::QuickLogConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::incident::{
    normalize_symptom, CommitRequest, CommitValidationError, Incident, IncidentId,
};
pub use model::life_event::{LifeEvent, LifeEventId, LifeEventStart};
pub use model::valence::{classify, parse_valence, Valence, ValenceMarker};
pub use repo::incident_repo::{InMemoryIncidentStore, IncidentStore};
pub use repo::life_event_repo::{InMemoryLifeEventProvider, LifeEventProvider};
pub use repo::{RepoError, RepoResult};
pub use service::commit_gateway::{CommitError, CommitOutcome, LogCommitGateway};
pub use service::home_service::{DaySummary, HomeScreen, LastLogged, LifeEventCard};
pub use service::quick_log::{OpenSession, QuickLogError, QuickLogSession, SessionState};
pub use service::selection::LifeEventSelection;
pub use service::timeline::{build_day, most_recent, DayTimelineEntry};

/// Minimal health-check API for host integration checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
