//! `window.localStorage` behind the `KeyValueStorage` seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storage handle is looked up on every call instead of being cached,
//! which keeps [`BrowserStorage`] a plain `Send + Sync` unit value that can
//! live inside a Leptos signal. Builds without the `csr` feature report the
//! storage as unavailable, so the app starts empty and writes fail softly.

use todos::{KeyValueStorage, StoreError};

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or(StoreError::Unavailable)?
        .local_storage()
        .map_err(js_error)?
        .ok_or(StoreError::Unavailable)
}

#[cfg(feature = "csr")]
fn js_error(err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}
