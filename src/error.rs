//! Error types for the docforensics library

use thiserror::Error;

/// Result type alias for docforensics operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Missing or malformed image payload
    #[error("invalid image payload: {reason}")]
    InvalidInput { reason: String },

    /// Image bytes could not be decoded into a pixel buffer
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// A zero-sized pixel buffer reached the analysis core
    #[error("image has no pixels")]
    EmptyImage,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }

    /// True for errors caused by the caller's payload, false for
    /// unexpected failures the shell should report as server errors.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::Decode(_))
    }
}
