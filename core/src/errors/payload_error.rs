// core/src/errors/payload_error.rs
use thiserror::Error;

/// Both variants render the same text: the caller only learns that the
/// payload could not be used.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Invalid JSON payload on stdin")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid JSON payload on stdin")]
    Unreadable(#[source] std::io::Error),
}
