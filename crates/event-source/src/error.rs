//! Event source error types.

use thiserror::Error;

/// Errors that can occur while reading or decoding events.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to read the event file itself.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record was not valid JSON or did not match any known event shape.
    #[error("malformed event record: {0}")]
    Json(#[from] serde_json::Error),

    /// A timestamp field could not be parsed.
    #[error("unparseable timestamp: {value}")]
    Timestamp { value: String },

    /// A record decoded but violated a field constraint.
    #[error("invalid event record: {0}")]
    Invalid(String),
}
