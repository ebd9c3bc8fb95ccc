//! Sink error types.

use thiserror::Error;

/// A notification could not be delivered.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store refused or could not take the notification.
    #[error("persistence sink unavailable: {reason}")]
    Unavailable { reason: String },
}

impl StoreError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
