//! Text embedding capability and the local hash-based backend.
//!
//! The scoring core only ever talks to [`TextEmbedder`], so the hash
//! embedding can be swapped for an ML backend without touching metric logic.

use crate::vector::Vector;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Default dimension for text embeddings.
pub const DEFAULT_EMBEDDING_DIM: usize = 64;

/// Capability for encoding short text into fixed-length vectors.
///
/// Implementations must be deterministic: encoding the same text twice
/// yields the same vector, so identical field names always compare at
/// cosine similarity 1.0.
pub trait TextEmbedder: Send + Sync {
    /// Encode a text value into a vector of [`TextEmbedder::dim`] components.
    fn encode(&self, text: &str) -> Vector;

    /// Dimension of the vectors produced by this embedder.
    fn dim(&self) -> usize;
}

/// Deterministic hash-based text embedder.
///
/// Character trigrams and whole words are hashed into bucket positions of a
/// fixed-size vector, which is then L2-normalized. Words contribute more
/// than trigrams so near-identical names with a shared word stand out. The
/// approach trades semantic depth for zero model weight; the trait seam
/// exists so a learned embedding can replace it.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl TextEmbedder for HashEmbedder {
    fn encode(&self, text: &str) -> Vector {
        let normalized = text.to_lowercase();
        let mut components = vec![0.0f32; self.dim];

        for trigram in generate_trigrams(&normalized) {
            let pos = (hash_of(&trigram) as usize) % self.dim;
            components[pos] += 1.0;
        }

        for word in normalized.split_whitespace() {
            let pos = (hash_of(word) as usize) % self.dim;
            components[pos] += 2.0; // Words contribute more
        }

        let mut vector = Vector::new(components);
        vector.normalize();
        vector
    }

    fn dim(&self) -> usize {
        self.dim
    }
}

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Generate character trigrams from a string, padded at both ends.
pub(crate) fn generate_trigrams(s: &str) -> HashSet<String> {
    let padded = format!("  {}  ", s);
    let chars: Vec<char> = padded.chars().collect();

    if chars.len() < 3 {
        return HashSet::new();
    }

    chars
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_deterministic() {
        let embedder = HashEmbedder::default();
        let v1 = embedder.encode("customer_name");
        let v2 = embedder.encode("customer_name");
        assert_eq!(v1.as_slice(), v2.as_slice());
        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_encode_is_case_insensitive() {
        let embedder = HashEmbedder::default();
        let v1 = embedder.encode("User_ID");
        let v2 = embedder.encode("user_id");
        assert_eq!(v1.as_slice(), v2.as_slice());
    }

    #[test]
    fn test_encoded_vectors_are_normalized() {
        let embedder = HashEmbedder::default();
        let v = embedder.encode("order_total");
        assert!((v.norm() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_similar_names_score_higher_than_different_names() {
        let embedder = HashEmbedder::default();
        let base = embedder.encode("customer_name");
        let close = embedder.encode("customer_names");
        let far = embedder.encode("zip");

        let sim_close = base.cosine_similarity(&close);
        let sim_far = base.cosine_similarity(&far);
        assert!(
            sim_close > sim_far,
            "expected {} > {}",
            sim_close,
            sim_far
        );
    }

    #[test]
    fn test_unrelated_names_stay_below_collision_range() {
        let embedder = HashEmbedder::default();
        let a = embedder.encode("user_id");
        let b = embedder.encode("created_at");
        assert!(a.cosine_similarity(&b) < 0.8);
    }

    #[test]
    fn test_trigram_generation() {
        let trigrams = generate_trigrams("ab");
        // "  ab  " of length 6 yields 4 windows
        assert_eq!(trigrams.len(), 4);
        assert!(trigrams.contains(" ab"));
    }

    #[test]
    fn test_dim_matches_configuration() {
        let embedder = HashEmbedder::new(128);
        assert_eq!(embedder.dim(), 128);
        assert_eq!(embedder.encode("anything").dim(), 128);
    }
}
