/// Suggestion-pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("exclusion-set resolution failed: {reason}")]
    ExclusionFailed { reason: String },

    #[error("{strategy} generation failed: {reason}")]
    GenerationFailed { strategy: String, reason: String },
}
