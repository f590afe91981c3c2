//! Collaborator contracts for incident and life-event data.
//!
//! # Responsibility
//! - Define the storage-facing traits the quick-log flow and timeline use.
//! - Ship in-memory implementations for hosts without a storage backend.
//!
//! # Invariants
//! - Every read returns a stable snapshot for that call.
//! - Failures surface as `RepoError` values, never panics.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod incident_repo;
pub mod life_event_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by incident/life-event collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Backend could not be reached or refused the call.
    Unavailable(String),
    /// Backend returned data that violates model invariants.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
            Self::InvalidData(message) => write!(f, "invalid stored data: {message}"),
        }
    }
}

impl Error for RepoError {}
