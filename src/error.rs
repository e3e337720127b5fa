use thiserror::Error;

/// Central error type for the zexly backend.
///
/// Only `MissingApiKey` and `GenerationFailed` are submission-scoped failures
/// the front end is expected to show to the user; malformed model output is
/// never an error (see `ai::response_parser`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("API_KEY environment variable not set.")]
    MissingApiKey,

    #[error("Failed to generate lyrics from the AI. Please check the server log for more details.")]
    GenerationFailed,

    #[error("A generation is already in progress")]
    Busy,

    #[error("Invalid BPM {0}: must be between 90 and 180 in steps of 5")]
    InvalidBpm(u16),

    #[error("API key cannot be empty")]
    InvalidApiKey,

    #[error("History item not found: {0}")]
    HistoryItemNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("State lock poisoned")]
    LockPoisoned,
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
