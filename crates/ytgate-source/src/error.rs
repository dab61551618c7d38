//! Error types for video source operations.

use thiserror::Error;

/// Result type for video source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while resolving or downloading a video.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("yt-dlp not found in PATH")]
    YtDlpNotFound,

    /// The video exists but cannot be served (removed, region-locked, ...).
    #[error("{0}")]
    Unavailable(String),

    /// A required metadata key was missing from the extractor output.
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AgeRestricted(String),

    #[error("{0}")]
    Private(String),

    /// The identifier or URL did not match the extractor's expected shape.
    #[error("{0}")]
    ParseFailed(String),

    #[error("empty media payload for {0}")]
    EmptyContent(String),

    /// Extractor failed for a reason outside the taxonomy above.
    #[error("{0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SourceError {
    /// Create a missing-metadata-key error.
    pub fn missing_key(key: &str) -> Self {
        Self::NotFound(format!("'{key}'"))
    }

    /// Create a generic extraction error.
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }
}
