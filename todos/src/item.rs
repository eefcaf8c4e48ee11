//! Todo items and their session-local identity.

use std::fmt;

use uuid::Uuid;

/// Stable handle for an item within one session.
///
/// Ids are minted when an item is loaded or added and are never persisted;
/// storage only ever sees the ordered texts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(Uuid);

impl TodoId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
}

impl TodoItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { id: TodoId::new(), text: text.into() }
    }
}
