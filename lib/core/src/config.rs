//! Scoring configuration: thresholds and metric weights.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum cosine similarity between two same-table names to flag a
/// collision candidate.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.80;

/// Minimum similarity to the "meaningful field name" concept.
pub const DEFAULT_MEANINGFUL_MIN: f32 = 0.05;

/// Maximum similarity to the "placeholder unknown generic dummy test"
/// concept.
pub const DEFAULT_PLACEHOLDER_MAX: f32 = 0.80;

/// Per-metric weights. A weight is the maximum raw contribution of its
/// metric to the total score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub field_names: f64,
    pub field_descriptions: f64,
    pub field_name_similarity: f64,
    pub field_types: f64,
    pub keys_presence: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            field_names: 35.0,
            field_descriptions: 25.0,
            field_name_similarity: 20.0,
            field_types: 10.0,
            keys_presence: 10.0,
        }
    }
}

impl Weights {
    /// Sum of all weights, the denominator of the total percentage.
    pub fn total(&self) -> f64 {
        self.field_names
            + self.field_descriptions
            + self.field_name_similarity
            + self.field_types
            + self.keys_presence
    }

    /// Merge caller-supplied overrides key by key. Recognized keys replace
    /// the default for that metric only; unrecognized keys are ignored.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, f64>) {
        for (key, value) in overrides {
            match key.as_str() {
                "field_names" => self.field_names = *value,
                "field_descriptions" => self.field_descriptions = *value,
                "field_name_similarity" => self.field_name_similarity = *value,
                "field_types" => self.field_types = *value,
                "keys_presence" => self.keys_presence = *value,
                _ => {}
            }
        }
    }
}

/// Full configuration for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub similarity_threshold: f32,
    pub meaningful_min: f32,
    pub placeholder_max: f32,
    pub weights: Weights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            meaningful_min: DEFAULT_MEANINGFUL_MIN,
            placeholder_max: DEFAULT_PLACEHOLDER_MAX,
            weights: Weights::default(),
        }
    }
}
