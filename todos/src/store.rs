//! Persisted todo list.
//!
//! DESIGN
//! ======
//! The list lives in memory and is mirrored to a single storage key as a JSON
//! array of strings. Every mutation rewrites the whole array; lists stay
//! small enough that this is simpler than any incremental format.
//!
//! Positional index is the addressing scheme here. Each item also carries a
//! [`TodoId`] so callers that hold on to an item across renders can resolve
//! it back to its current position with [`TodoStore::position`].

use crate::error::{StoreError, TodoError};
use crate::item::{TodoId, TodoItem};
use crate::storage::KeyValueStorage;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

#[derive(Clone, Debug)]
pub struct TodoStore<S> {
    storage: S,
    key: String,
    items: Vec<TodoItem>,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Load the list stored under `key`.
    ///
    /// A missing value, a read failure, or anything that is not a JSON array
    /// of strings all yield an empty list.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = load_texts(&storage, &key).into_iter().map(TodoItem::new).collect();
        Self { storage, key, items }
    }

    /// Write the whole list under the configured key.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when serialization or the backend write fails.
    pub fn save(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.texts())?;
        self.storage.set_item(&self.key, &raw)
    }

    /// Append `text` and persist. Returns the new item's id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when persisting fails; the item stays in
    /// memory either way.
    pub fn add(&mut self, text: impl Into<String>) -> Result<TodoId, StoreError> {
        let item = TodoItem::new(text);
        let id = item.id;
        self.items.push(item);
        self.save()?;
        Ok(id)
    }

    /// Replace the text at `index`, keeping its id, and persist.
    ///
    /// # Errors
    ///
    /// [`TodoError::IndexOutOfRange`] leaves the list and storage untouched.
    /// [`TodoError::Store`] means the change is in memory but not persisted.
    pub fn update(&mut self, index: usize, text: impl Into<String>) -> Result<(), TodoError> {
        let len = self.items.len();
        let item = self.items.get_mut(index).ok_or(TodoError::IndexOutOfRange { index, len })?;
        item.text = text.into();
        self.save()?;
        Ok(())
    }

    /// Remove the item at `index`, shifting later items down, and persist.
    ///
    /// # Errors
    ///
    /// Same contract as [`TodoStore::update`].
    pub fn delete(&mut self, index: usize) -> Result<TodoItem, TodoError> {
        let len = self.items.len();
        if index >= len {
            return Err(TodoError::IndexOutOfRange { index, len });
        }
        let removed = self.items.remove(index);
        self.save()?;
        Ok(removed)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn get_by_id(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Current position of `id`.
    #[must_use]
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn load_texts<S: KeyValueStorage>(storage: &S, key: &str) -> Vec<String> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("todo list read failed for {key}: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(texts) => texts,
        Err(e) => {
            log::warn!("ignoring malformed todo list under {key}: {e}");
            Vec::new()
        }
    }
}
