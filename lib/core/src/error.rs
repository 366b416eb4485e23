use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoreError>;

/// Validation and analysis failures surfaced by the scoring engine.
///
/// Validation happens eagerly, before any metric computation; a failed
/// schema is never partially scored, so a rejection can never be mistaken
/// for a legitimately low score.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Schema must be a non-empty list of field descriptors")]
    EmptySchema,

    #[error("Schema entry {index} is missing required keys: {missing}")]
    MissingRequiredKeys { index: usize, missing: String },

    #[error("Analysis backend failure: {0}")]
    Analysis(String),
}

impl ScoreError {
    /// Machine-readable error kind for transport-layer mapping.
    pub fn kind(&self) -> &'static str {
        match self {
            ScoreError::EmptySchema => "Empty Schema",
            ScoreError::MissingRequiredKeys { .. } => "Invalid Schema Entry",
            ScoreError::Analysis(_) => "Internal Analysis Error",
        }
    }

    /// Whether the failure is the caller's (4xx) rather than the service's (5xx).
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, ScoreError::Analysis(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(ScoreError::EmptySchema.kind(), "Empty Schema");
        let err = ScoreError::MissingRequiredKeys {
            index: 2,
            missing: "column_name".to_string(),
        };
        assert_eq!(err.kind(), "Invalid Schema Entry");
        assert!(err.is_caller_error());
        assert!(err.to_string().contains("entry 2"));
        assert!(!ScoreError::Analysis("oom".to_string()).is_caller_error());
    }
}
