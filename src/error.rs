//! Error types for mood-bloom

use thiserror::Error;

/// Errors that can occur during classification or derivation
#[derive(Debug, Error)]
pub enum BloomError {
    /// Missing or empty input text. Surfaced as a 400 at the transport layer.
    #[error("Text is required")]
    InvalidInput,

    /// The classifier capability failed or returned malformed output.
    /// Surfaced as a 500; there is no retry.
    #[error("classification failed: {0}")]
    Classification(String),

    /// The distribution cannot support derivation (ranking needs at least a
    /// dominant and a second emotion).
    #[error("distribution must contain at least two emotions, got {0}")]
    Precondition(usize),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
