//! Score report assembled by the engine.
//!
//! The serialized key names are the wire contract consumed by existing
//! clients of the scoring endpoint; keep them stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Diagnostic report of penalized field names. The three lists are
/// category-disjoint but may share field names; each name appears at most
/// once per list, sorted for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PenalizedFields {
    /// Names that failed the meaningfulness checks.
    #[serde(rename = "NonMeaningful")]
    pub non_meaningful: Vec<String>,

    /// The subset of non-meaningful names that also lack any description.
    #[serde(rename = "NonMeaningful_NoDescription")]
    pub non_meaningful_no_description: Vec<String>,

    /// Names involved in at least one undifferentiated collision pair.
    #[serde(rename = "Similar_Undifferentiated")]
    pub similar_undifferentiated: Vec<String>,
}

impl PenalizedFields {
    pub(crate) fn from_sets(
        non_meaningful: BTreeSet<String>,
        non_meaningful_no_description: BTreeSet<String>,
        similar_undifferentiated: BTreeSet<String>,
    ) -> Self {
        Self {
            non_meaningful: non_meaningful.into_iter().collect(),
            non_meaningful_no_description: non_meaningful_no_description.into_iter().collect(),
            similar_undifferentiated: similar_undifferentiated.into_iter().collect(),
        }
    }
}

/// Composite score for one evaluation: raw sub-scores in `[0, weight]`,
/// percentages in `[0, 100]`, and the penalized-field diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(rename = "Field Names Score")]
    pub field_names_score: f64,
    #[serde(rename = "Field Descriptions Score")]
    pub field_descriptions_score: f64,
    #[serde(rename = "Field Name Similarity Score")]
    pub field_name_similarity_score: f64,
    #[serde(rename = "Field Types Score")]
    pub field_types_score: f64,
    #[serde(rename = "Keys Presence Score")]
    pub keys_presence_score: f64,
    #[serde(rename = "Total Score")]
    pub total_score: f64,

    #[serde(rename = "Field Names Score (%)")]
    pub field_names_score_pct: f64,
    #[serde(rename = "Field Descriptions Score (%)")]
    pub field_descriptions_score_pct: f64,
    #[serde(rename = "Field Name Similarity Score (%)")]
    pub field_name_similarity_score_pct: f64,
    #[serde(rename = "Field Types Score (%)")]
    pub field_types_score_pct: f64,
    #[serde(rename = "Keys Presence Score (%)")]
    pub keys_presence_score_pct: f64,
    #[serde(rename = "Total Score (%)")]
    pub total_score_pct: f64,

    #[serde(rename = "Penalized Fields")]
    pub penalized_fields: PenalizedFields,
}

/// `score / weight` as a percentage, with a zero weight reporting exactly 0
/// instead of dividing.
pub(crate) fn safe_pct(score: f64, weight: f64) -> f64 {
    if weight != 0.0 {
        score / weight * 100.0
    } else {
        0.0
    }
}
