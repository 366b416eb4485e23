//! # schemascore-analysis
//!
//! Text analysis capabilities backing the schemascore metrics.
//!
//! This crate defines the two capability seams the scoring core is written
//! against, plus local deterministic backends for both:
//!
//! - [`TextEmbedder`] - encode short text into a fixed-length [`Vector`] and
//!   compare encodings by cosine similarity. The local backend is
//!   [`HashEmbedder`], a trigram + word hashing embedding.
//! - [`TextClassifier`] - tokenize and part-of-speech tag a phrase, and score
//!   its similarity against fixed reference concepts. The local backend is
//!   [`LexiconClassifier`], driven by an embedded lexicon and a compositional
//!   word-vector model.
//!
//! Both backends are immutable after construction and safe to share across
//! threads behind an `Arc`; building them is cheap but callers are expected
//! to construct them once per process and reuse them for every evaluation.
//!
//! ## Example
//!
//! ```rust
//! use schemascore_analysis::{HashEmbedder, LexiconClassifier, ReferenceConcept,
//!     TextClassifier, TextEmbedder};
//!
//! let embedder = HashEmbedder::default();
//! let a = embedder.encode("user_id");
//! let b = embedder.encode("user_id");
//! assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-6);
//!
//! let classifier = LexiconClassifier::new();
//! let sim = classifier.concept_similarity("user id", ReferenceConcept::PlaceholderName);
//! assert!(sim < 0.8);
//! ```

pub mod classify;
pub mod embedding;
pub mod lexicon;
pub mod vector;

pub use classify::{
    LexiconClassifier, PartOfSpeech, ReferenceConcept, TaggedToken, TextClassifier,
};
pub use embedding::{HashEmbedder, TextEmbedder, DEFAULT_EMBEDDING_DIM};
pub use vector::Vector;
