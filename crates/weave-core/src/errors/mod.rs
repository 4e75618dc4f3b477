//! Error taxonomy: per-subsystem enums aggregated into [`WeaveError`].

pub mod storage_error;
pub mod suggest_error;

pub use storage_error::StorageError;
pub use suggest_error::SuggestError;

/// Top-level error for the Weave engine.
#[derive(Debug, thiserror::Error)]
pub enum WeaveError {
    #[error("profile not found: {id}")]
    ProfileNotFound { id: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("suggestion error: {0}")]
    SuggestError(#[from] SuggestError),

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type WeaveResult<T> = Result<T, WeaveError>;
