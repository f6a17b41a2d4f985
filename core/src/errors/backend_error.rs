// core/src/errors/backend_error.rs
use thiserror::Error;

/// Failure talking to the approval backend.
///
/// The `Display` text ends up inside the deny reason, so every variant
/// renders its detail inline.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request timeout after {secs}s")]
    Timeout { secs: u64 },

    #[error("HTTP Error {status}: {body_snippet}")]
    HttpStatus { status: u16, body_snippet: String },

    #[error("transport error: {0}")]
    Transport(#[source] anyhow::Error),

    #[error("decode error: {0}")]
    Decode(#[source] anyhow::Error),
}

impl BackendError {
    pub fn decode(err: impl Into<anyhow::Error>) -> Self {
        BackendError::Decode(err.into())
    }
}
