//! The scoring engine: validation, metric orchestration, aggregation.

use crate::config::ScoringConfig;
use crate::error::{Result, ScoreError};
use crate::field::FieldDescriptor;
use crate::metrics;
use crate::report::{safe_pct, PenalizedFields, ScoreResult};
use schemascore_analysis::{HashEmbedder, LexiconClassifier, TextClassifier, TextEmbedder};
use std::sync::Arc;
use tracing::debug;

/// The process-wide analysis capabilities, bundled explicitly.
///
/// Both capabilities are immutable once constructed; cloning the context is
/// cheap and shares the underlying backends. Construct it once at startup
/// and reuse it for every evaluation - the backends are never re-initialized
/// per request.
#[derive(Clone)]
pub struct AnalysisContext {
    pub classifier: Arc<dyn TextClassifier>,
    pub embedder: Arc<dyn TextEmbedder>,
}

impl AnalysisContext {
    pub fn new(classifier: Arc<dyn TextClassifier>, embedder: Arc<dyn TextEmbedder>) -> Self {
        Self {
            classifier,
            embedder,
        }
    }

    /// Context backed by the local deterministic backends: the lexicon
    /// classifier and the hash embedder.
    pub fn local() -> Self {
        Self::new(
            Arc::new(LexiconClassifier::new()),
            Arc::new(HashEmbedder::default()),
        )
    }
}

/// Stateless evaluator over a shared [`AnalysisContext`].
///
/// Every call to [`evaluate`](Self::evaluate) is a pure function of the
/// schema and configuration; the engine holds no per-evaluation state and is
/// safe to share across worker threads.
pub struct ScoringEngine {
    context: AnalysisContext,
}

impl ScoringEngine {
    pub fn new(context: AnalysisContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AnalysisContext {
        &self.context
    }

    /// Score a schema, returning the composite result or the first
    /// validation failure. No partial score is ever computed for an invalid
    /// schema.
    pub fn evaluate(
        &self,
        schema: &[FieldDescriptor],
        config: &ScoringConfig,
    ) -> Result<ScoreResult> {
        validate(schema)?;

        debug!(fields = schema.len(), "scoring schema");

        let weights = &config.weights;

        let names = metrics::field_names_metric(schema, self.context.classifier.as_ref(), config);
        let field_descriptions_score =
            metrics::field_descriptions_metric(schema, weights.field_descriptions);
        let field_types_score = metrics::field_types_metric(schema, weights.field_types);
        let keys_presence_score = metrics::keys_presence_metric(schema, weights.keys_presence);
        let collisions =
            metrics::name_collision_metric(schema, self.context.embedder.as_ref(), config)?;

        let total_score = names.score
            + field_descriptions_score
            + collisions.score
            + field_types_score
            + keys_presence_score;

        debug!(
            total = total_score,
            non_meaningful = names.non_meaningful.len(),
            collisions = collisions.penalized.len(),
            "schema scored"
        );

        Ok(ScoreResult {
            field_names_score: names.score,
            field_descriptions_score,
            field_name_similarity_score: collisions.score,
            field_types_score,
            keys_presence_score,
            total_score,

            field_names_score_pct: safe_pct(names.score, weights.field_names),
            field_descriptions_score_pct: safe_pct(
                field_descriptions_score,
                weights.field_descriptions,
            ),
            field_name_similarity_score_pct: safe_pct(
                collisions.score,
                weights.field_name_similarity,
            ),
            field_types_score_pct: safe_pct(field_types_score, weights.field_types),
            keys_presence_score_pct: safe_pct(keys_presence_score, weights.keys_presence),
            total_score_pct: safe_pct(total_score, weights.total()),

            penalized_fields: PenalizedFields::from_sets(
                names.non_meaningful,
                names.no_description,
                collisions.penalized,
            ),
        })
    }
}

/// Reject empty schemas and entries with blank required keys before any
/// metric runs. The first violating entry wins.
fn validate(schema: &[FieldDescriptor]) -> Result<()> {
    if schema.is_empty() {
        return Err(ScoreError::EmptySchema);
    }

    for (index, field) in schema.iter().enumerate() {
        let mut missing = Vec::new();
        if field.table_name.trim().is_empty() {
            missing.push("table_name");
        }
        if field.column_name.trim().is_empty() {
            missing.push("column_name");
        }
        if !missing.is_empty() {
            return Err(ScoreError::MissingRequiredKeys {
                index,
                missing: missing.join(", "),
            });
        }
    }

    Ok(())
}
