//! # schemascore
//!
//! Weighted quality scoring for relational schema descriptions.
//!
//! A schema arrives as a flat list of field descriptors spanning one or more
//! tables. schemascore runs five quality metrics over it - field-name
//! meaningfulness, description completeness, type completeness, key
//! presence, and embedding-based name-collision detection - and combines
//! them under configurable weights into a composite score with per-metric
//! percentages and per-field diagnostics.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install schemascore
//! schemascore --http-port 5000
//! ```
//!
//! Then `POST /score_schema` with a JSON body carrying a `schema` array of
//! field descriptors and any threshold or weight overrides.
//!
//! ### As a Library
//!
//! ```rust
//! use schemascore::prelude::*;
//!
//! // Build the analysis capabilities once per process
//! let engine = ScoringEngine::new(AnalysisContext::local());
//!
//! let schema = vec![
//!     FieldDescriptor {
//!         table_name: "users".into(),
//!         column_name: "user_id".into(),
//!         description: Some("Unique user identifier".into()),
//!         data_type: Some("uuid".into()),
//!         primary_key: true,
//!         foreign_key: false,
//!     },
//! ];
//!
//! let result = engine.evaluate(&schema, &ScoringConfig::default()).unwrap();
//! assert!(result.total_score_pct > 90.0);
//! ```
//!
//! ## Crate Structure
//!
//! schemascore is composed of several crates:
//!
//! - [`schemascore-core`](https://docs.rs/schemascore-core) - field
//!   descriptors, the five metrics, weighting and aggregation
//! - [`schemascore-analysis`](https://docs.rs/schemascore-analysis) - the
//!   `TextClassifier` and `TextEmbedder` capability traits plus the local
//!   lexicon and hash-embedding backends
//! - [`schemascore-api`](https://docs.rs/schemascore-api) - the REST
//!   endpoint

// Re-export core types
pub use schemascore_core::{
    AnalysisContext, FieldDescriptor, PenalizedFields, Result, ScoreError, ScoreResult,
    ScoringConfig, ScoringEngine, Weights,
};

// Re-export analysis capabilities
pub use schemascore_analysis::{
    HashEmbedder, LexiconClassifier, PartOfSpeech, ReferenceConcept, TaggedToken,
    TextClassifier, TextEmbedder, Vector,
};

// Re-export API
pub use schemascore_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AnalysisContext, FieldDescriptor, HashEmbedder, LexiconClassifier, PenalizedFields,
        RestApi, ScoreError, ScoreResult, ScoringConfig, ScoringEngine, TextClassifier,
        TextEmbedder, Vector, Weights,
    };
}
