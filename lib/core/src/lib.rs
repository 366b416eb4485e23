//! # schemascore-core
//!
//! Scoring engine for relational schema descriptions.
//!
//! A schema arrives as a flat list of [`FieldDescriptor`] entries spanning
//! one or more tables. [`ScoringEngine::evaluate`] validates the list, runs
//! five independent quality metrics, and combines them under configurable
//! weights into a [`ScoreResult`] with per-metric percentages and a
//! diagnostic report of penalized field names.
//!
//! The metrics:
//!
//! - field name meaningfulness (lexical + concept-similarity checks)
//! - description completeness (presence only)
//! - type completeness (presence only)
//! - key presence (primary/foreign key per table)
//! - name collision (embedding cosine similarity within each table)
//!
//! The two analysis capabilities live behind traits in
//! `schemascore-analysis` and are handed to the engine once, inside an
//! [`AnalysisContext`], so evaluations stay pure and backends stay
//! substitutable.
//!
//! ## Example
//!
//! ```rust
//! use schemascore_core::{AnalysisContext, FieldDescriptor, ScoringConfig, ScoringEngine};
//!
//! let engine = ScoringEngine::new(AnalysisContext::local());
//! let schema = vec![FieldDescriptor {
//!     table_name: "users".into(),
//!     column_name: "user_id".into(),
//!     description: Some("Unique user identifier".into()),
//!     data_type: Some("uuid".into()),
//!     primary_key: true,
//!     foreign_key: false,
//! }];
//!
//! let result = engine.evaluate(&schema, &ScoringConfig::default()).unwrap();
//! assert!(result.total_score_pct > 0.0);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod metrics;
pub mod report;

pub use config::{ScoringConfig, Weights};
pub use engine::{AnalysisContext, ScoringEngine};
pub use error::{Result, ScoreError};
pub use field::FieldDescriptor;
pub use report::{PenalizedFields, ScoreResult};
