//! Domain model for incidents, life events and valence.
//!
//! # Responsibility
//! - Define the records the quick-log flow creates and the timeline reads.
//!
//! # Invariants
//! - Incidents are immutable once committed.
//! - Incident -> life event links are weak id references, never ownership.

pub mod incident;
pub mod life_event;
pub mod valence;
