//! Error types.
//!
//! Parsing and scoring are total and never fail. These errors belong to the
//! boundaries around them: structured input adapters, file sources, and
//! generative-answer providers. `ProviderError` lives here so the key
//! generator can downcast and classify provider failures for retry decisions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while bringing answer text into the core.
#[derive(Debug, Error)]
pub enum GradeError {
    /// Structured input was missing a field or had the wrong shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An answer or question source could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GradeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GradeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur when interacting with an answer provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The API returned a 429 rate limit response.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The requested model was not found.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}

impl ProviderError {
    /// Returns `true` if this error is permanent and should not be retried.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            ProviderError::AuthenticationFailed(_) | ProviderError::ModelNotFound(_)
        )
    }

    /// Returns the retry-after delay in milliseconds, if applicable.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            ProviderError::RateLimited { retry_after_ms } => Some(*retry_after_ms),
            _ => None,
        }
    }
}
