//! Key-value storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists through `window.localStorage`; native tests use
//! [`MemoryStorage`]. Both sit behind [`KeyValueStorage`], whose surface
//! mirrors the string-in/string-out `Storage` API.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::StoreError;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// String key-value persistence.
pub trait KeyValueStorage {
    /// Read the value for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory storage. Clones share the same map, so a clone handed to a
/// second [`crate::TodoApp`] behaves like a page reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail, as a full quota would.
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.borrow_mut().read_only = read_only;
    }

    /// Raw value for `key`, bypassing the trait.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        if inner.read_only {
            return Err(StoreError::Backend("storage is read-only".to_owned()));
        }
        inner.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
