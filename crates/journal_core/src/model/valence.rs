//! Incident valence and its display marker.
//!
//! # Responsibility
//! - Define the categorical emotional tone attached to every incident.
//! - Map valence to a render marker without touching any other state.
//!
//! # Invariants
//! - `classify` is total: absent valence renders exactly like `Neutral`.
//! - Markers are never empty.

use serde::{Deserialize, Serialize};

/// Categorical emotional tone of an incident.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Valence {
    Positive,
    Negative,
    Mixed,
    #[default]
    Neutral,
}

impl Valence {
    /// Stable lowercase name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Mixed => "mixed",
            Self::Neutral => "neutral",
        }
    }

    /// Display marker for this valence.
    pub fn marker(self) -> ValenceMarker {
        classify(Some(self))
    }
}

/// Render marker shown next to a timeline row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValenceMarker(&'static str);

impl ValenceMarker {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ValenceMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

const MARKER_POSITIVE: ValenceMarker = ValenceMarker("\u{1F642}");
const MARKER_NEGATIVE: ValenceMarker = ValenceMarker("\u{1F61F}");
const MARKER_MIXED: ValenceMarker = ValenceMarker("\u{1F610}");
const MARKER_NEUTRAL: ValenceMarker = ValenceMarker("\u{1F636}");

/// Maps an optional valence to its marker.
///
/// Unknown or missing valence falls back to the neutral marker.
pub fn classify(valence: Option<Valence>) -> ValenceMarker {
    match valence {
        Some(Valence::Positive) => MARKER_POSITIVE,
        Some(Valence::Negative) => MARKER_NEGATIVE,
        Some(Valence::Mixed) => MARKER_MIXED,
        Some(Valence::Neutral) | None => MARKER_NEUTRAL,
    }
}

/// Parses a lowercase wire name. Anything else yields `None`.
pub fn parse_valence(value: &str) -> Option<Valence> {
    match value {
        "positive" => Some(Valence::Positive),
        "negative" => Some(Valence::Negative),
        "mixed" => Some(Valence::Mixed),
        "neutral" => Some(Valence::Neutral),
        _ => None,
    }
}
