//! Persisted dark-mode preference.
//!
//! Stored as the literal strings `"true"` / `"false"`. Anything else,
//! including a missing key, reads as off.

use crate::error::StoreError;
use crate::storage::KeyValueStorage;

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[must_use]
pub fn read_preference<S: KeyValueStorage>(storage: &S, key: &str) -> bool {
    match storage.get_item(key) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            log::warn!("dark mode preference read failed: {e}");
            false
        }
    }
}

/// Persist the preference.
///
/// # Errors
///
/// Returns a [`StoreError`] when the backend rejects the write.
pub fn write_preference<S: KeyValueStorage>(storage: &S, key: &str, enabled: bool) -> Result<(), StoreError> {
    storage.set_item(key, if enabled { "true" } else { "false" })
}
