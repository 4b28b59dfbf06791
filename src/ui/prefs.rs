//! Persisted UI preferences.
//!
//! Only one preference exists today: the notes view mode, stored under
//! [`VIEW_PREFERENCE_KEY`]. Writes are last-writer-wins and a failing store never
//! breaks the page; the failure is logged and the default is used.

use super::view::ViewMode;
use crate::error::StoreError;
use std::collections::HashMap;

pub const VIEW_PREFERENCE_KEY: &str = "notesView";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ============================================================================
// Backends
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone)]
pub struct SledStore {
    tree: sled::Tree,
}

impl SledStore {
    pub fn new(tree: sled::Tree) -> Self {
        Self { tree }
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.tree.get(key)? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| StoreError::Encoding),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.tree.insert(key, value.as_bytes())?;
        Ok(())
    }
}

// ============================================================================
// View Preference
// ============================================================================

pub struct ViewPreference<S> {
    store: S,
}

impl<S: KeyValueStore> ViewPreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The saved mode, or grid when nothing (or nothing readable) is saved.
    pub fn load(&self) -> ViewMode {
        match self.store.get(VIEW_PREFERENCE_KEY) {
            Ok(Some(raw)) => ViewMode::parse(&raw),
            Ok(None) => ViewMode::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read view preference");
                ViewMode::default()
            }
        }
    }

    pub fn save(&mut self, mode: ViewMode) {
        if let Err(e) = self.store.set(VIEW_PREFERENCE_KEY, mode.as_str()) {
            tracing::warn!(error = %e, mode = mode.as_str(), "failed to save view preference");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_to_grid() {
        let prefs = ViewPreference::new(MemoryStore::new());
        assert_eq!(prefs.load(), ViewMode::Grid);
    }

    #[test]
    fn test_save_then_load() {
        let mut prefs = ViewPreference::new(MemoryStore::new());
        prefs.save(ViewMode::Gallery);
        assert_eq!(prefs.load(), ViewMode::Gallery);
        assert_eq!(
            prefs.store().get(VIEW_PREFERENCE_KEY).unwrap().as_deref(),
            Some("gallery")
        );
    }

    #[test]
    fn test_legacy_list_value_loads_as_grid() {
        let mut store = MemoryStore::new();
        store.set(VIEW_PREFERENCE_KEY, "list").unwrap();
        assert_eq!(ViewPreference::new(store).load(), ViewMode::Grid);
    }

    #[test]
    fn test_sled_store_roundtrip() {
        let db = sled::Config::new().temporary(true).open().unwrap();
        let mut prefs = ViewPreference::new(SledStore::new(db.open_tree("prefs").unwrap()));
        prefs.save(ViewMode::Bento);

        let reopened = ViewPreference::new(SledStore::new(db.open_tree("prefs").unwrap()));
        assert_eq!(reopened.load(), ViewMode::Bento);
    }
}
