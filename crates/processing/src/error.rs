//! Observer error types.

use thiserror::Error;

/// Error returned by an observer that failed to act on a notification.
///
/// The processor isolates these: a failing observer is logged and counted,
/// and the remaining observers are still notified.
#[derive(Debug, Error)]
pub enum ObserverError {
    /// The observer could not handle the notification.
    #[error("observer failed: {0}")]
    Failed(String),
}

impl ObserverError {
    /// Creates a failure with the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}
