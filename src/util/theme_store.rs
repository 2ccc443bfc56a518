//! Persistence of the theme preference in client-local storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preference is a single string under one key. Older page versions
//! wrote `light`/`dark` under a different key; that key is read as a fallback
//! when the canonical one is absent, but never written.
//!
//! TRADE-OFFS
//! ==========
//! Storage can be disabled or full (private browsing, quota). Reads fall back
//! to `system` and writes are dropped, so the page keeps working with its
//! in-memory state.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::state::theme::ThemePreference;

/// Canonical key written by current page versions.
pub const STORAGE_KEY: &str = "theme-preference";
/// Key written by earlier page versions (`light`/`dark` only).
pub const LEGACY_STORAGE_KEY: &str = "theme";

/// Failure talking to the storage backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Minimal string key-value storage.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Keys the preference is read from and written to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub canonical: String,
    pub legacy: Option<String>,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { canonical: STORAGE_KEY.to_owned(), legacy: Some(LEGACY_STORAGE_KEY.to_owned()) }
    }
}

/// Read the stored preference.
///
/// Absent, invalid and unreadable values all yield [`ThemePreference::System`].
/// The legacy key is only consulted when the canonical key is absent.
pub fn read_preference<S: PreferenceStore + ?Sized>(store: &S, keys: &StorageKeys) -> ThemePreference {
    match store.get_item(&keys.canonical) {
        Ok(Some(raw)) => return raw.parse().unwrap_or_default(),
        Ok(None) => {}
        Err(err) => {
            leptos::logging::log!("theme preference read skipped: {err}");
            return ThemePreference::System;
        }
    }

    let Some(legacy) = keys.legacy.as_deref() else {
        return ThemePreference::System;
    };
    match store.get_item(legacy) {
        Ok(Some(raw)) => ThemePreference::from_legacy(&raw).unwrap_or_default(),
        Ok(None) => ThemePreference::System,
        Err(err) => {
            leptos::logging::log!("legacy theme preference read skipped: {err}");
            ThemePreference::System
        }
    }
}

/// Persist `preference` under the canonical key.
pub fn write_preference<S: PreferenceStore + ?Sized>(
    store: &S,
    keys: &StorageKeys,
    preference: ThemePreference,
) -> Result<(), StorageError> {
    store.set_item(&keys.canonical, preference.as_str())
}

/// In-process store backing controller and storage tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

#[cfg(test)]
impl MemoryStore {
    /// A store that fails every read and write, like disabled `localStorage`.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { items: RefCell::default(), unavailable: true }
    }

    /// Seed a store with existing entries.
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let items = items
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { items: RefCell::new(items), unavailable: false }
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}
