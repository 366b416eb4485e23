//! Embedded lexicon backing the [`LexiconClassifier`](crate::LexiconClassifier).
//!
//! Closed-class words (determiners, pronouns, adpositions, conjunctions,
//! auxiliary and light verbs) are the words that never convey field intent on
//! their own. Semantic word classes group open-class vocabulary that should
//! cluster together in the concept space; the classes are deliberately small
//! and biased toward schema naming vocabulary.
//!
//! All tables are sorted so lookups can binary-search.

use crate::classify::PartOfSpeech;

const DETERMINERS: &[&str] = &[
    "a", "an", "any", "each", "every", "no", "some", "that", "the", "these", "this", "those",
];

const PRONOUNS: &[&str] = &[
    "he", "her", "him", "his", "i", "it", "its", "me", "my", "our", "she", "their", "them",
    "they", "us", "we", "you", "your",
];

const ADPOSITIONS: &[&str] = &[
    "about", "above", "after", "at", "before", "below", "between", "by", "during", "for",
    "from", "in", "into", "of", "off", "on", "onto", "out", "over", "per", "through", "to",
    "under", "until", "up", "via", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "because", "but", "if", "nor", "or", "so", "then", "when", "while", "yet",
];

// Auxiliaries and light verbs only. Past participles that double as column
// vocabulary (created, updated, deleted) stay out so timestamp columns keep
// an informative token.
const VERBS: &[&str] = &[
    "am", "are", "be", "become", "been", "being", "can", "could", "did", "do", "does", "get",
    "gets", "got", "had", "has", "have", "is", "make", "makes", "may", "might", "must",
    "shall", "should", "use", "uses", "was", "were", "will", "would",
];

const ADJECTIVES: &[&str] = &[
    "active", "available", "current", "default", "enabled", "external", "first", "foreign",
    "internal", "last", "main", "maximum", "minimum", "new", "old", "primary", "secondary",
    "total", "unique", "valid",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["able", "al", "ary", "ful", "ible", "ish", "ive", "ous"];

/// Semantic word classes for the concept space. Words sharing a class share
/// an embedding direction.
const WORD_CLASSES: &[(&str, &[&str])] = &[
    (
        "placeholder",
        &[
            "aaa", "abc", "asdf", "bar", "baz", "blah", "dummy", "fixme", "foo", "generic",
            "junk", "misc", "placeholder", "qux", "sample", "stuff", "temp", "test", "testing",
            "tests", "thing", "tmp", "todo", "unknown", "unnamed", "untitled", "xxx", "xyz",
        ],
    ),
    (
        "identifier",
        &[
            "code", "guid", "id", "identifier", "key", "num", "number", "ref", "reference",
            "uuid",
        ],
    ),
    (
        "temporal",
        &[
            "at", "created", "date", "datetime", "day", "deleted", "modified", "month", "time",
            "timestamp", "updated", "year",
        ],
    ),
    (
        "person",
        &[
            "account", "author", "client", "customer", "member", "owner", "person", "user",
        ],
    ),
    (
        "quantity",
        &[
            "amount", "cost", "count", "price", "quantity", "rate", "sum", "total", "value",
        ],
    ),
    (
        "schema",
        &[
            "attribute", "column", "description", "field", "label", "name", "schema", "table",
            "title",
        ],
    ),
    (
        "quality",
        &["clear", "descriptive", "friendly", "meaningful", "readable"],
    ),
];

fn contains(table: &[&str], word: &str) -> bool {
    table.binary_search(&word).is_ok()
}

/// Look up the closed-class (or listed adjective) tag for a lowercased word.
pub(crate) fn closed_class_pos(word: &str) -> Option<PartOfSpeech> {
    if contains(DETERMINERS, word) {
        Some(PartOfSpeech::Determiner)
    } else if contains(PRONOUNS, word) {
        Some(PartOfSpeech::Pronoun)
    } else if contains(ADPOSITIONS, word) {
        Some(PartOfSpeech::Adposition)
    } else if contains(CONJUNCTIONS, word) {
        Some(PartOfSpeech::Conjunction)
    } else if contains(VERBS, word) {
        Some(PartOfSpeech::Verb)
    } else if contains(ADJECTIVES, word) {
        Some(PartOfSpeech::Adjective)
    } else {
        None
    }
}

/// Whether a lowercased word looks like an adjective by suffix.
pub(crate) fn has_adjective_suffix(word: &str) -> bool {
    ADJECTIVE_SUFFIXES
        .iter()
        .any(|suffix| word.len() > suffix.len() + 2 && word.ends_with(suffix))
}

/// Semantic class of a lowercased word, if it belongs to one.
pub(crate) fn word_class(word: &str) -> Option<&'static str> {
    WORD_CLASSES
        .iter()
        .find(|(_, words)| contains(words, word))
        .map(|(class, _)| *class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        let closed = [
            DETERMINERS,
            PRONOUNS,
            ADPOSITIONS,
            CONJUNCTIONS,
            VERBS,
            ADJECTIVES,
        ];
        for table in closed {
            assert!(table.windows(2).all(|w| w[0] < w[1]), "unsorted: {:?}", table);
        }
        for (class, words) in WORD_CLASSES {
            assert!(
                words.windows(2).all(|w| w[0] < w[1]),
                "unsorted class {}: {:?}",
                class,
                words
            );
        }
    }

    #[test]
    fn test_closed_class_lookup() {
        assert_eq!(closed_class_pos("the"), Some(PartOfSpeech::Determiner));
        assert_eq!(closed_class_pos("at"), Some(PartOfSpeech::Adposition));
        assert_eq!(closed_class_pos("is"), Some(PartOfSpeech::Verb));
        assert_eq!(closed_class_pos("primary"), Some(PartOfSpeech::Adjective));
        assert_eq!(closed_class_pos("customer"), None);
    }

    #[test]
    fn test_adjective_suffixes() {
        assert!(has_adjective_suffix("nullable"));
        assert!(has_adjective_suffix("descriptive"));
        assert!(!has_adjective_suffix("table")); // too short past the suffix
        assert!(!has_adjective_suffix("email"));
    }

    #[test]
    fn test_word_classes() {
        assert_eq!(word_class("dummy"), Some("placeholder"));
        assert_eq!(word_class("uuid"), Some("identifier"));
        assert_eq!(word_class("created"), Some("temporal"));
        assert_eq!(word_class("elephant"), None);
    }
}
