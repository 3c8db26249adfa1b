//! `localStorage` adapter for the calendar records.

use advent_core::KeyValueStore;

use crate::dom::{js_error_message, local_storage};

/// Calendar storage backed by the page origin's `localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

#[derive(Debug, thiserror::Error)]
pub enum BrowserStoreError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage {op} failed for `{key}`: {message}")]
    Operation {
        op: &'static str,
        key: String,
        message: String,
    },
}

impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, BrowserStoreError> {
        local_storage().map_err(|err| BrowserStoreError::Unavailable(js_error_message(&err)))
    }

    fn op_error(op: &'static str, key: &str, err: &wasm_bindgen::JsValue) -> BrowserStoreError {
        BrowserStoreError::Operation {
            op,
            key: key.to_string(),
            message: js_error_message(err),
        }
    }
}

impl KeyValueStore for BrowserStore {
    type Error = BrowserStoreError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| Self::op_error("read", key, &err))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| Self::op_error("write", key, &err))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .remove_item(key)
            .map_err(|err| Self::op_error("remove", key, &err))
    }
}
