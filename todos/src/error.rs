//! Error types for storage access and list mutations.

use crate::item::TodoId;

/// Failure talking to the key-value storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage is reachable (non-browser build, or storage disabled).
    #[error("key-value storage is unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota exceeded, security error).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// The list could not be serialized to JSON.
    #[error("failed to serialize todo list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error returned by list mutations.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    /// Submitted text was empty after trimming.
    #[error("todo text must not be empty")]
    EmptyText,
    /// Positional access past the end of the list.
    #[error("todo index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// No item with this id exists in the current session.
    #[error("unknown todo item: {0}")]
    UnknownItem(TodoId),
    /// The mutation was applied in memory but could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}
