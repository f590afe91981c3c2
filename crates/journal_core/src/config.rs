//! Quick-log configuration.
//!
//! # Responsibility
//! - Carry host-provided picker options into the session.
//! - Provide defaults so hosts can pass partial configuration.
//!
//! # Invariants
//! - `normalized()` output has no blank or duplicate symptoms.

use crate::model::incident::normalize_symptom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const DEFAULT_QUICK_SYMPTOMS: &[&str] = &[
    "Intrusive thoughts",
    "Heart racing",
    "Frozen up / can't speak",
];

/// Options for the quick-log picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickLogConfig {
    /// Ordered one-tap symptom choices.
    pub quick_symptoms: Vec<String>,
}

impl Default for QuickLogConfig {
    fn default() -> Self {
        Self {
            quick_symptoms: DEFAULT_QUICK_SYMPTOMS
                .iter()
                .map(|value| value.to_string())
                .collect(),
        }
    }
}

impl QuickLogConfig {
    /// Returns a copy with trimmed, non-blank, first-wins unique symptoms.
    pub fn normalized(&self) -> Self {
        let mut seen = HashSet::new();
        let quick_symptoms = self
            .quick_symptoms
            .iter()
            .map(|value| normalize_symptom(value))
            .filter(|value| !value.is_empty())
            .filter(|value| seen.insert(value.clone()))
            .collect();
        Self { quick_symptoms }
    }
}

#[cfg(test)]
mod tests {
    use super::QuickLogConfig;

    #[test]
    fn default_config_has_quick_symptoms() {
        let config = QuickLogConfig::default();
        assert_eq!(config.quick_symptoms.len(), 3);
        assert_eq!(config.quick_symptoms[1], "Heart racing");
    }

    #[test]
    fn normalized_drops_blanks_and_duplicates() {
        let config = QuickLogConfig {
            quick_symptoms: vec![
                " Heart  racing ".to_string(),
                "".to_string(),
                "Heart racing".to_string(),
                "Panic spike".to_string(),
            ],
        };
        assert_eq!(
            config.normalized().quick_symptoms,
            vec!["Heart racing".to_string(), "Panic spike".to_string()]
        );
    }
}
