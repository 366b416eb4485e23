//! The five quality metric computations.
//!
//! Each metric is an independent pure function over the schema slice; the
//! engine runs all five and aggregates. Only the name metrics talk to the
//! analysis capabilities, and only through the capability traits.

use crate::config::ScoringConfig;
use crate::error::{Result, ScoreError};
use crate::field::FieldDescriptor;
use ahash::AHashMap;
use schemascore_analysis::{ReferenceConcept, TextClassifier, TextEmbedder, Vector};
use std::collections::BTreeSet;

/// Outcome of the field-name meaningfulness metric.
pub(crate) struct NameQualityOutcome {
    pub score: f64,
    pub non_meaningful: BTreeSet<String>,
    pub no_description: BTreeSet<String>,
}

/// Outcome of the name-collision metric.
pub(crate) struct CollisionOutcome {
    pub score: f64,
    pub penalized: BTreeSet<String>,
}

/// Collapse runs of `.` and `_` into single spaces so compound and nested
/// names read as multi-word phrases: `device.web_info.browser` becomes
/// `device web info browser`. The input is trimmed first; delimiter-produced
/// edge spaces are kept and still count toward the length check.
pub fn normalize_field_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_delimiter_run = false;
    for c in name.trim().chars() {
        if c == '.' || c == '_' {
            if !in_delimiter_run {
                normalized.push(' ');
            }
            in_delimiter_run = true;
        } else {
            normalized.push(c);
            in_delimiter_run = false;
        }
    }
    normalized
}

/// The six-step meaningfulness check for a single field name:
/// normalize delimiters, require at least 4 characters, drop punctuation
/// and numeric tokens, require an informative part of speech among the
/// rest, then gate on similarity to the two reference concepts.
pub fn is_field_name_meaningful(
    classifier: &dyn TextClassifier,
    name: &str,
    config: &ScoringConfig,
) -> bool {
    let normalized = normalize_field_name(name);

    if normalized.chars().count() < 4 {
        return false;
    }

    let tokens = classifier.tag(&normalized);
    let content_tokens: Vec<_> = tokens.iter().filter(|t| t.is_content()).collect();
    if content_tokens.is_empty() {
        return false;
    }

    if !content_tokens.iter().any(|t| t.pos.is_informative()) {
        return false;
    }

    let meaningful =
        classifier.concept_similarity(&normalized, ReferenceConcept::MeaningfulName);
    if meaningful < config.meaningful_min {
        return false;
    }

    let placeholder =
        classifier.concept_similarity(&normalized, ReferenceConcept::PlaceholderName);
    if placeholder > config.placeholder_max {
        return false;
    }

    true
}

/// Field-name meaningfulness metric. A non-meaningful name with a
/// description still counts as adequately named (the description
/// compensates) but is recorded for diagnostics; without a description it
/// costs score and lands in both diagnostic sets.
pub(crate) fn field_names_metric(
    schema: &[FieldDescriptor],
    classifier: &dyn TextClassifier,
    config: &ScoringConfig,
) -> NameQualityOutcome {
    let mut adequately_named = 0usize;
    let mut non_meaningful = BTreeSet::new();
    let mut no_description = BTreeSet::new();

    for field in schema {
        if is_field_name_meaningful(classifier, &field.column_name, config) {
            adequately_named += 1;
        } else {
            non_meaningful.insert(field.column_name.clone());
            if field.has_description() {
                adequately_named += 1;
            } else {
                no_description.insert(field.column_name.clone());
            }
        }
    }

    let score =
        adequately_named as f64 / schema.len() as f64 * config.weights.field_names;
    NameQualityOutcome {
        score,
        non_meaningful,
        no_description,
    }
}

/// Description completeness: presence only, no judgment of quality.
pub(crate) fn field_descriptions_metric(schema: &[FieldDescriptor], weight: f64) -> f64 {
    let with_descriptions = schema.iter().filter(|f| f.has_description()).count();
    with_descriptions as f64 / schema.len() as f64 * weight
}

/// Type completeness: a declared, non-empty data type per field.
pub(crate) fn field_types_metric(schema: &[FieldDescriptor], weight: f64) -> f64 {
    let with_types = schema.iter().filter(|f| f.has_data_type()).count();
    with_types as f64 / schema.len() as f64 * weight
}

/// Key presence: the weight is split evenly between the fraction of tables
/// with a primary key and the fraction with a foreign key.
pub(crate) fn keys_presence_metric(schema: &[FieldDescriptor], weight: f64) -> f64 {
    let mut tables: AHashMap<&str, (bool, bool)> = AHashMap::new();
    for field in schema {
        let flags = tables.entry(field.table_name.as_str()).or_insert((false, false));
        flags.0 |= field.primary_key;
        flags.1 |= field.foreign_key;
    }

    let num_tables = tables.len();
    if num_tables == 0 {
        return 0.0;
    }

    let with_primary = tables.values().filter(|(pk, _)| *pk).count();
    let with_foreign = tables.values().filter(|(_, fk)| *fk).count();

    with_primary as f64 / num_tables as f64 * (weight / 2.0)
        + with_foreign as f64 / num_tables as f64 * (weight / 2.0)
}

/// Name-collision metric. Same-table pairs whose name encodings reach the
/// similarity threshold are penalized unless both fields carry distinct
/// non-empty descriptions. The confusion-rate denominator is the pair count
/// across the whole schema, not per table, so collisions dilute as tables
/// are added; that scale is part of the scoring contract.
pub(crate) fn name_collision_metric(
    schema: &[FieldDescriptor],
    embedder: &dyn TextEmbedder,
    config: &ScoringConfig,
) -> Result<CollisionOutcome> {
    let total_fields = schema.len();
    let weight = config.weights.field_name_similarity;

    // A single field has no pairs: confusion rate 0 by definition.
    if total_fields < 2 {
        return Ok(CollisionOutcome {
            score: weight,
            penalized: BTreeSet::new(),
        });
    }

    // Encode each distinct name once; the cache lives for this evaluation only.
    let mut encodings: AHashMap<&str, Vector> = AHashMap::new();
    for field in schema {
        if !encodings.contains_key(field.column_name.as_str()) {
            let encoding = embedder.encode(&field.column_name);
            if encoding.is_empty() {
                return Err(ScoreError::Analysis(format!(
                    "embedder returned an empty encoding for {:?}",
                    field.column_name
                )));
            }
            encodings.insert(field.column_name.as_str(), encoding);
        }
    }

    let mut penalized_pairs = 0usize;
    let mut penalized = BTreeSet::new();

    for (i, a) in schema.iter().enumerate() {
        for b in &schema[i + 1..] {
            // Cross-table pairs are never candidates
            if a.table_name != b.table_name {
                continue;
            }

            let similarity = encodings[a.column_name.as_str()]
                .cosine_similarity(&encodings[b.column_name.as_str()]);
            if similarity < config.similarity_threshold {
                continue;
            }

            let desc_a = a.description_trimmed();
            let desc_b = b.description_trimmed();
            if !desc_a.is_empty() && !desc_b.is_empty() && desc_a != desc_b {
                // Distinct descriptions let a reader disambiguate
                continue;
            }

            penalized_pairs += 1;
            penalized.insert(a.column_name.clone());
            penalized.insert(b.column_name.clone());
        }
    }

    let total_pairs = total_fields * (total_fields - 1) / 2;
    let confusion_rate = penalized_pairs as f64 / total_pairs as f64;

    Ok(CollisionOutcome {
        score: (1.0 - confusion_rate) * weight,
        penalized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemascore_analysis::{HashEmbedder, LexiconClassifier};

    fn field(table: &str, column: &str) -> FieldDescriptor {
        FieldDescriptor::new(table, column)
    }

    fn described(table: &str, column: &str, description: &str) -> FieldDescriptor {
        FieldDescriptor {
            description: Some(description.to_string()),
            ..FieldDescriptor::new(table, column)
        }
    }

    #[test]
    fn test_normalize_field_name() {
        assert_eq!(
            normalize_field_name("device.web_info.browser"),
            "device web info browser"
        );
        assert_eq!(normalize_field_name("user__id"), "user id");
        assert_eq!(normalize_field_name("  name  "), "name");
        assert_eq!(normalize_field_name("_ab_"), " ab ");
    }

    #[test]
    fn test_meaningful_names() {
        let classifier = LexiconClassifier::new();
        let config = ScoringConfig::default();
        for name in ["user_id", "created_at", "order.total_price", "email"] {
            assert!(
                is_field_name_meaningful(&classifier, name, &config),
                "{} should be meaningful",
                name
            );
        }
    }

    #[test]
    fn test_short_names_fail_the_length_check() {
        let classifier = LexiconClassifier::new();
        let config = ScoringConfig::default();
        for name in ["id", "a", "x_y"] {
            assert!(!is_field_name_meaningful(&classifier, name, &config));
        }
    }

    #[test]
    fn test_names_without_informative_tokens_fail() {
        let classifier = LexiconClassifier::new();
        let config = ScoringConfig::default();
        // Letter-digit mixes, pure numbers, and stopword-only names
        for name in ["data1", "data2", "1234", "of_the", "is_at"] {
            assert!(
                !is_field_name_meaningful(&classifier, name, &config),
                "{} should not be meaningful",
                name
            );
        }
    }

    #[test]
    fn test_placeholder_names_fail_the_concept_gate() {
        let classifier = LexiconClassifier::new();
        let config = ScoringConfig::default();
        for name in ["test", "temp", "dummy"] {
            assert!(!is_field_name_meaningful(&classifier, name, &config));
        }
    }

    #[test]
    fn test_field_names_metric_description_compensates() {
        let classifier = LexiconClassifier::new();
        let config = ScoringConfig::default();
        let schema = vec![
            field("t", "user_id"),
            described("t", "data1", "Raw sensor reading"),
            field("t", "data2"),
        ];

        let outcome = field_names_metric(&schema, &classifier, &config);
        // user_id meaningful, data1 compensated by its description, data2 penalized
        assert!((outcome.score - 2.0 / 3.0 * 35.0).abs() < 1e-9);
        assert_eq!(
            outcome.non_meaningful,
            BTreeSet::from(["data1".to_string(), "data2".to_string()])
        );
        assert_eq!(
            outcome.no_description,
            BTreeSet::from(["data2".to_string()])
        );
    }

    #[test]
    fn test_description_and_type_metrics() {
        let schema = vec![
            FieldDescriptor {
                data_type: Some("uuid".to_string()),
                ..described("t", "user_id", "The user")
            },
            FieldDescriptor {
                description: Some("   ".to_string()),
                data_type: Some(String::new()),
                ..field("t", "other")
            },
        ];

        assert_eq!(field_descriptions_metric(&schema, 25.0), 12.5);
        assert_eq!(field_types_metric(&schema, 10.0), 5.0);
    }

    #[test]
    fn test_keys_presence_split() {
        let schema = vec![
            FieldDescriptor {
                primary_key: true,
                ..field("users", "user_id")
            },
            field("users", "name"),
            FieldDescriptor {
                primary_key: true,
                ..field("orders", "order_id")
            },
            FieldDescriptor {
                foreign_key: true,
                ..field("orders", "user_id")
            },
        ];

        // Both tables have a primary key, one of two has a foreign key
        let score = keys_presence_metric(&schema, 10.0);
        assert!((score - (5.0 + 2.5)).abs() < 1e-9);
    }

    #[test]
    fn test_identical_names_without_descriptions_collide() {
        let embedder = HashEmbedder::default();
        let config = ScoringConfig::default();
        let schema = vec![field("t", "amount"), field("t", "amount")];

        let outcome = name_collision_metric(&schema, &embedder, &config).unwrap();
        assert_eq!(
            outcome.penalized,
            BTreeSet::from(["amount".to_string()])
        );
        assert_eq!(outcome.score, 0.0); // 1 penalized pair of 1 possible
    }

    #[test]
    fn test_distinct_descriptions_exempt_identical_names() {
        let embedder = HashEmbedder::default();
        let config = ScoringConfig::default();
        let schema = vec![
            described("t", "amount", "Gross amount in cents"),
            described("t", "amount", "Net amount in cents"),
        ];

        let outcome = name_collision_metric(&schema, &embedder, &config).unwrap();
        assert!(outcome.penalized.is_empty());
        assert_eq!(outcome.score, config.weights.field_name_similarity);
    }

    #[test]
    fn test_identical_descriptions_do_not_exempt() {
        let embedder = HashEmbedder::default();
        let config = ScoringConfig::default();
        let schema = vec![
            described("t", "amount", "The amount"),
            described("t", "amount", "The amount"),
        ];

        let outcome = name_collision_metric(&schema, &embedder, &config).unwrap();
        assert_eq!(
            outcome.penalized,
            BTreeSet::from(["amount".to_string()])
        );
    }

    #[test]
    fn test_cross_table_pairs_are_never_compared() {
        let embedder = HashEmbedder::default();
        let config = ScoringConfig::default();
        let schema = vec![field("users", "amount"), field("orders", "amount")];

        let outcome = name_collision_metric(&schema, &embedder, &config).unwrap();
        assert!(outcome.penalized.is_empty());
        assert_eq!(outcome.score, config.weights.field_name_similarity);
    }

    #[test]
    fn test_single_field_has_zero_confusion() {
        let embedder = HashEmbedder::default();
        let config = ScoringConfig::default();
        let schema = vec![field("t", "amount")];

        let outcome = name_collision_metric(&schema, &embedder, &config).unwrap();
        assert_eq!(outcome.score, config.weights.field_name_similarity);
    }

    #[test]
    fn test_schema_wide_pair_denominator_dilutes_collisions() {
        let embedder = HashEmbedder::default();
        let config = ScoringConfig::default();
        // One colliding pair in table a; two unrelated fields in table b.
        // The denominator is C(4, 2) = 6, not the per-table pair count.
        let schema = vec![
            field("a", "amount"),
            field("a", "amount"),
            field("b", "city"),
            field("b", "country"),
        ];

        let outcome = name_collision_metric(&schema, &embedder, &config).unwrap();
        let expected = (1.0 - 1.0 / 6.0) * config.weights.field_name_similarity;
        assert!((outcome.score - expected).abs() < 1e-9);
    }
}
