//! Key-value persistence seam.
//!
//! The calendar persists two JSON records. Front ends provide a
//! [`KeyValueStore`]; reads go through [`load_json`], which never fails the
//! caller and instead reports why a record was discarded.

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Minimal string key-value store, shaped after browser `localStorage`.
pub trait KeyValueStore {
    type Error: std::error::Error + 'static;

    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete a value. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

/// In-process store. Clones share the same map, so a clone behaves like the
/// same browser origin after a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Why a stored record could not be used.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("storage read failed for `{key}`: {message}")]
    Storage { key: String, message: String },
    #[error("stored value for `{key}` is not valid: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a JSON record.
///
/// `Ok(None)` means the key is absent.
///
/// # Errors
///
/// Returns [`LoadError`] when the store fails or the value does not parse
/// into `T`. Validation done by `T`'s `Deserialize` impl counts as parsing.
pub fn load_json<S, T>(store: &S, key: &str) -> Result<Option<T>, LoadError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = store.get(key).map_err(|err| LoadError::Storage {
        key: key.to_string(),
        message: err.to_string(),
    })?;
    raw.map(|text| {
        serde_json::from_str(&text).map_err(|source| LoadError::Malformed {
            key: key.to_string(),
            source,
        })
    })
    .transpose()
}

/// Read a record, logging and discarding anything unusable.
pub fn load_json_or_default<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match load_json(store, key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("discarding stored calendar record: {err}");
            None
        }
    }
}

/// Serialize and write a record. Failures are logged; the in-memory value
/// stays authoritative for the session.
pub fn save_json<S, T>(store: &S, key: &str, value: &T)
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let text = match serde_json::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            log::error!("could not encode `{key}`: {err}");
            return;
        }
    };
    if let Err(err) = store.set(key, &text) {
        log::warn!("could not persist `{key}`: {err}");
    }
}

/// Delete a record, logging failures.
pub fn remove_record<S>(store: &S, key: &str)
where
    S: KeyValueStore + ?Sized,
{
    if let Err(err) = store.remove(key) {
        log::warn!("could not remove `{key}`: {err}");
    }
}
