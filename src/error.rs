//! Error Types
//!
//! One error enum per concern. None of these reach the user; callers log
//! them and fall back to an empty or unchanged form.

use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;
pub type StorageResult<T> = Result<T, StorageError>;

/// List editor errors. State is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("position {position} is out of range for {len} items")]
    OutOfRange { position: usize, len: usize },
    #[error("no draft in progress")]
    NoDraft,
    #[error("the item being edited no longer exists")]
    DraftTargetGone,
}

/// Local storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage access failed for key {key}: {message}")]
    Access { key: String, message: String },
    #[error("failed to serialize stored value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Date conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("not a valid date: {0:?}")]
    Invalid(String),
}
