//! Persistent key/value store holding role statuses and the session flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and onboarding flows write here; guards only read. The store is
//! injected through Leptos context as a [`StoreHandle`] so guards can run
//! against [`MemoryStore`] in tests and [`BrowserStore`] in the browser.
//!
//! DESIGN
//! ======
//! Backend failures never reach the guard path. [`StatusStore::get`] logs
//! them and reports the key as absent, which every policy treats as the
//! least-privileged state.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock};

/// Failure talking to a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("storage backend failed for `{key}`: {message}")]
    Backend { key: String, message: String },
}

/// Flat string key/value store. Last write wins per key.
pub trait StatusStore: Send + Sync {
    /// Raw read of `key`.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Read `key`, treating backend failures as an absent value.
    fn get(&self, key: &str) -> Option<String> {
        match self.read(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("status store: read of {key} failed, treating as absent: {e}");
                None
            }
        }
    }
}

/// In-memory store shared between clones.
///
/// Access is serialized behind a lock so multi-threaded hosts keep the
/// last-write-wins behavior of the browser store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let slots = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { slots: Arc::new(RwLock::new(slots)) }
    }
}

impl StatusStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.remove(key);
        Ok(())
    }
}

/// `window.localStorage`-backed store. Requires a browser environment.
///
/// Holds no handle; each call looks storage up again, so the store stays
/// `Send + Sync` and survives reloads the way `localStorage` does.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

#[cfg(feature = "csr")]
fn backend_error(key: &str, err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Backend {
        key: key.to_owned(),
        message: format!("{err:?}"),
    }
}

impl StatusStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| backend_error(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| backend_error(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(|e| backend_error(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}

/// Shared store handle provided to the component tree via context.
#[derive(Clone)]
pub struct StoreHandle(Arc<dyn StatusStore>);

impl StoreHandle {
    pub fn new<S: StatusStore + 'static>(store: S) -> Self {
        Self(Arc::new(store))
    }

    /// Handle backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }
}

impl Deref for StoreHandle {
    type Target = dyn StatusStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StoreHandle(..)")
    }
}
