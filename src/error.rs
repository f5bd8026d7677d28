//! Error types for timer validation and synchronization

use thiserror::Error;

use crate::api::ApiError;

/// Local rejection of the form draft, raised before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Counter name must be 2–32 characters.")]
    NameLength { length: usize },

    #[error("Please select a valid future date/time.")]
    MissingTargetDate,

    #[error("Please select a valid future date/time.")]
    UnparsableTargetDate { input: String },

    #[error("Please select a valid future date/time.")]
    TargetNotInFuture,
}

/// Failure to synchronize with the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Another save or reset is still outstanding
    #[error("Another request is still in progress.")]
    Busy,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SyncError {
    /// Detail appended to the failure status
    pub fn user_message(&self) -> String {
        match self {
            SyncError::Busy => self.to_string(),
            SyncError::Api(e) => e.user_message(),
        }
    }
}

/// Failure of a save attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Sync(#[from] SyncError),
}
