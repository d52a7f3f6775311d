//! Key/value persistence holding session evidence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is injected through Leptos context as a [`SessionContext`] so
//! the oracle, route guard and navigation shell never reach for a global.
//! `BrowserStore` is the production backend; `MemoryStore` substitutes for it
//! in tests.
//!
//! TRADE-OFFS
//! ==========
//! `BrowserStore` re-acquires `localStorage` on every call instead of caching
//! the handle: `web_sys::Storage` is not `Send`, and context values must be.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::{Arc, RwLock};

/// Storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded [`wire::SessionUser`].
pub const USER_KEY: &str = "user";

/// Failure of the underlying storage mechanism.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled, missing, or rejected the operation.
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    /// A record could not be encoded for storage.
    #[error("failed to encode session record: {0}")]
    Encode(String),
}

/// Synchronous, origin-scoped key/value storage.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when storage cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when storage cannot be reached.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when storage cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared store capability provided through Leptos context.
#[derive(Clone)]
pub struct SessionContext(Arc<dyn SessionStore>);

impl SessionContext {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Arc::new(store))
    }

    /// Context backed by the browser's `localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }
}

impl Deref for SessionContext {
    type Target = dyn SessionStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl SessionStore for SessionContext {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.remove(key)
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `window.localStorage` backend. Outside a browser build every operation
/// reports [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|_| StorageError::Unavailable("localStorage access denied".to_owned()))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

#[cfg(feature = "csr")]
fn rejected(op: &str, key: &str) -> StorageError {
    StorageError::Unavailable(format!("localStorage rejected {op} of {key:?}"))
}

#[cfg(feature = "csr")]
impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(|_| rejected("read", key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(|_| rejected("write", key))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?.remove_item(key).map_err(|_| rejected("removal", key))
    }
}

#[cfg(not(feature = "csr"))]
fn not_in_browser() -> StorageError {
    StorageError::Unavailable("not running in a browser".to_owned())
}

#[cfg(not(feature = "csr"))]
impl SessionStore for BrowserStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(not_in_browser())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(not_in_browser())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(not_in_browser())
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory backend. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { entries: Arc::new(RwLock::new(map)), unavailable: false }
    }

    /// Store whose every operation fails, standing in for disabled storage.
    pub fn unavailable() -> Self {
        Self { entries: Arc::default(), unavailable: true }
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |map| map.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_owned()));
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Unavailable("memory store lock poisoned".to_owned())
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.entries.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.write().map_err(poisoned)?.remove(key);
        Ok(())
    }
}
