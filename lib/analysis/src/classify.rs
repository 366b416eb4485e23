//! Text classification capability: tokenization, part-of-speech tagging, and
//! whole-phrase similarity against fixed reference concepts.

use crate::lexicon;
use crate::vector::Vector;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Dimension of the classifier's concept space.
pub const CLASSIFIER_DIM: usize = 256;

// Every alphabetic token shares a common axis so any two word phrases keep a
// modest positive baseline similarity; words in the same semantic class add
// a strong shared direction on top.
const SHARED_WEIGHT: f32 = 0.45;
const CLASS_WEIGHT: f32 = 0.85;

/// Coarse part-of-speech tags assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Verb,
    Adposition,
    Determiner,
    Pronoun,
    Conjunction,
    Numeric,
    Punctuation,
    /// Tokens that carry no part of speech, e.g. letter-digit mixes like `data1`.
    Other,
}

impl PartOfSpeech {
    /// Whether a token with this tag conveys field-name intent on its own.
    pub fn is_informative(&self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Adjective)
    }
}

/// A token paired with its assigned tag.
#[derive(Debug, Clone)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
}

impl TaggedToken {
    /// Tokens the meaningfulness check discards before the POS gate.
    pub fn is_content(&self) -> bool {
        !matches!(
            self.pos,
            PartOfSpeech::Punctuation | PartOfSpeech::Numeric
        ) && !self.text.trim().is_empty()
    }
}

/// Fixed reference concepts the classifier can compare phrases against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceConcept {
    /// "meaningful field name" - what a well-chosen column name resembles.
    MeaningfulName,
    /// "placeholder unknown generic dummy test" - throwaway naming.
    PlaceholderName,
}

impl ReferenceConcept {
    pub fn phrase(&self) -> &'static str {
        match self {
            ReferenceConcept::MeaningfulName => "meaningful field name",
            ReferenceConcept::PlaceholderName => "placeholder unknown generic dummy test",
        }
    }
}

/// Capability for per-token linguistic classification and whole-phrase
/// similarity against reference concepts.
///
/// Implementations must be immutable after construction so a single instance
/// can serve concurrent evaluations.
pub trait TextClassifier: Send + Sync {
    /// Tokenize a phrase on whitespace and tag each token.
    fn tag(&self, phrase: &str) -> Vec<TaggedToken>;

    /// Cosine similarity of the whole phrase against a reference concept,
    /// in [-1, 1]. Phrases with no tokens score 0.
    fn concept_similarity(&self, phrase: &str, concept: ReferenceConcept) -> f32;
}

/// Lexicon-driven classifier with a compositional word-vector concept space.
///
/// Tagging is a cascade of lookups against the embedded lexicon. Phrase
/// similarity composes one deterministic hashed vector per word: a shared
/// word-ness axis, a semantic-class direction for lexicon words, and a
/// word-unique direction; the phrase vector is the normalized token sum.
#[derive(Debug)]
pub struct LexiconClassifier {
    dim: usize,
    meaningful_ref: Vector,
    placeholder_ref: Vector,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self::with_dim(CLASSIFIER_DIM)
    }

    pub fn with_dim(dim: usize) -> Self {
        let mut classifier = Self {
            dim,
            meaningful_ref: Vector::zeros(dim),
            placeholder_ref: Vector::zeros(dim),
        };
        classifier.meaningful_ref =
            classifier.phrase_vector(ReferenceConcept::MeaningfulName.phrase());
        classifier.placeholder_ref =
            classifier.phrase_vector(ReferenceConcept::PlaceholderName.phrase());
        classifier
    }

    /// Compose the phrase vector as the normalized sum of token vectors.
    fn phrase_vector(&self, phrase: &str) -> Vector {
        let mut components = vec![0.0f32; self.dim];
        let mut token_count = 0usize;

        for token in phrase.to_lowercase().split_whitespace() {
            let token_vector = self.token_vector(token);
            for (acc, value) in components.iter_mut().zip(token_vector.as_slice()) {
                *acc += value;
            }
            token_count += 1;
        }

        let mut vector = Vector::new(components);
        if token_count > 0 {
            vector.normalize();
        }
        vector
    }

    /// One unit-length vector per word: shared axis + optional class
    /// direction + word-unique direction.
    fn token_vector(&self, word: &str) -> Vector {
        let mut components = vec![0.0f32; self.dim];
        let mut used = 0.0f32;

        if word.chars().any(|c| c.is_alphabetic()) {
            components[0] = SHARED_WEIGHT;
            used += SHARED_WEIGHT * SHARED_WEIGHT;
        }

        if let Some(class) = lexicon::word_class(word) {
            add_direction(&mut components, class, "class", CLASS_WEIGHT);
            used += CLASS_WEIGHT * CLASS_WEIGHT;
        }

        let word_weight = (1.0 - used).max(0.0).sqrt();
        add_direction(&mut components, word, "word", word_weight);

        Vector::new(components)
    }

    fn tag_word(&self, token: &str) -> PartOfSpeech {
        if token.chars().all(|c| !c.is_alphanumeric()) {
            return PartOfSpeech::Punctuation;
        }
        if is_numeric_like(token) {
            return PartOfSpeech::Numeric;
        }

        let lowered = token.to_lowercase();
        if let Some(pos) = lexicon::closed_class_pos(&lowered) {
            return pos;
        }
        if lowered.chars().any(|c| c.is_ascii_digit()) {
            // Letter-digit mixes (data1, col2) name nothing by themselves
            return PartOfSpeech::Other;
        }
        if lexicon::has_adjective_suffix(&lowered) {
            return PartOfSpeech::Adjective;
        }
        if lowered.chars().any(|c| c.is_alphabetic()) {
            return PartOfSpeech::Noun;
        }
        PartOfSpeech::Other
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TextClassifier for LexiconClassifier {
    fn tag(&self, phrase: &str) -> Vec<TaggedToken> {
        phrase
            .split_whitespace()
            .map(|token| TaggedToken {
                text: token.to_string(),
                pos: self.tag_word(token),
            })
            .collect()
    }

    fn concept_similarity(&self, phrase: &str, concept: ReferenceConcept) -> f32 {
        let reference = match concept {
            ReferenceConcept::MeaningfulName => &self.meaningful_ref,
            ReferenceConcept::PlaceholderName => &self.placeholder_ref,
        };
        self.phrase_vector(phrase).cosine_similarity(reference)
    }
}

/// Digits with optional thousands/decimal separators, or anything that
/// parses as a number.
fn is_numeric_like(token: &str) -> bool {
    if token.parse::<f64>().is_ok() {
        return true;
    }
    let mut has_digit = false;
    for c in token.chars() {
        match c {
            '0'..='9' => has_digit = true,
            ',' | '.' | '-' | '+' => {}
            _ => return false,
        }
    }
    has_digit
}

/// Deterministic pseudo-random unit direction over components 1..dim,
/// derived from a salted hash of the key.
fn add_direction(components: &mut [f32], key: &str, salt: &str, weight: f32) {
    if weight <= 0.0 || components.len() < 2 {
        return;
    }

    let mut hasher = DefaultHasher::new();
    (salt, key).hash(&mut hasher);
    let mut state = hasher.finish();
    if state == 0 {
        state = 0x9e37_79b9_7f4a_7c15;
    }

    let scale = weight / ((components.len() - 1) as f32).sqrt();
    for component in components.iter_mut().skip(1) {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        *component += if state & 1 == 1 { scale } else { -scale };
    }
}
