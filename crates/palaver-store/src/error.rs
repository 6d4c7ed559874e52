use thiserror::Error;

use crate::models::UserId;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The history lock was poisoned by a panicking writer.
    ///
    /// There is no recovery path: callers treat this as fatal.
    #[error("History lock poisoned")]
    LockPoisoned,

    /// A send named a user id that is not in the roster.
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
