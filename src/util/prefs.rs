//! Key-value preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme preference is the only durable state in the app. It goes
//! through the [`PreferenceStore`] trait so the theme logic can be tested
//! against an in-memory store; the `localStorage` implementation only
//! exists in `csr` builds.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Origin-scoped string key-value store.
pub trait PreferenceStore {
    /// Read a stored value; `None` when absent or the store is
    /// unavailable.
    fn load(&self, key: &str) -> Option<String>;

    /// Write a value. Failures (quota, privacy mode) are silent.
    fn save(&self, key: &str, value: &str);
}

/// In-memory store for headless use.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(RefCell<HashMap<String, String>>);

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage`-backed store.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
