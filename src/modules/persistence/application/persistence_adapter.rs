use crate::modules::persistence::domain::{KeyValueStore, StorageKey};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_warn};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Stateless typed façade over a `KeyValueStore`
///
/// Persisted state here is UI preference data: a failure to read, write or
/// parse an entry is logged and replaced by a default, never propagated.
#[derive(Clone)]
pub struct PersistenceAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Serialize `value` as JSON and store it; returns whether it was stored
    pub fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .map_err(Into::into)
            .and_then(|json| self.store.set(key.as_str(), &json));
        self.absorb(key, "save", result).is_some()
    }

    /// Deserialize the entry, or None if it is absent or unreadable
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = self.absorb(key, "load", self.store.get(key.as_str()))??;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log_warn!("Storage: discarding corrupt entry '{}': {}", key, e);
                None
            }
        }
    }

    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: StorageKey) -> T {
        self.load(key).unwrap_or_default()
    }

    /// Store a plain string without JSON encoding
    pub fn save_text(&self, key: StorageKey, value: &str) -> bool {
        let result = self.store.set(key.as_str(), value);
        self.absorb(key, "save", result).is_some()
    }

    pub fn load_text(&self, key: StorageKey) -> Option<String> {
        self.absorb(key, "load", self.store.get(key.as_str()))?
    }

    /// Delete the entry; absent entries are fine
    pub fn remove(&self, key: StorageKey) {
        let result = self.store.remove(key.as_str());
        self.absorb(key, "remove", result);
    }

    fn absorb<T>(&self, key: StorageKey, operation: &str, result: AppResult<T>) -> Option<T> {
        match result {
            Ok(value) => {
                log_debug!("Storage: {} '{}' ok", operation, key);
                Some(value)
            }
            Err(e) => {
                log_warn!("Storage: {} '{}' failed, using default: {}", operation, key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::MovieSummary;
    use crate::modules::persistence::infrastructure::MemoryStore;
    use crate::shared::errors::AppError;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::StorageError("disk on fire".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::StorageError("read-only".to_string()))
        }

        fn remove(&self, _key: &str) -> AppResult<()> {
            Err(AppError::StorageError("read-only".to_string()))
        }
    }

    #[test]
    fn test_favorites_round_trip_keeps_order() {
        let adapter = PersistenceAdapter::new(Arc::new(MemoryStore::new()));
        let favorites = vec![
            MovieSummary::new(3, "C"),
            MovieSummary::new(1, "A").with_poster("/a.jpg"),
            MovieSummary::new(2, "B").with_release_date("2001-01-01"),
        ];

        assert!(adapter.save(StorageKey::Favorites, &favorites));
        let loaded: Vec<MovieSummary> = adapter.load_or_default(StorageKey::Favorites);
        assert_eq!(loaded, favorites);
    }

    #[test]
    fn test_missing_entry_loads_default() {
        let adapter = PersistenceAdapter::new(Arc::new(MemoryStore::new()));
        let loaded: Vec<MovieSummary> = adapter.load_or_default(StorageKey::Favorites);
        assert!(loaded.is_empty());
        assert!(adapter.load_text(StorageKey::Theme).is_none());
    }

    #[test]
    fn test_corrupt_entry_is_swallowed() {
        let store = MemoryStore::new().with_entry(StorageKey::Favorites.as_str(), "[{not json");
        let adapter = PersistenceAdapter::new(Arc::new(store));

        let loaded: Option<Vec<MovieSummary>> = adapter.load(StorageKey::Favorites);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_backend_failures_never_propagate() {
        let adapter = PersistenceAdapter::new(Arc::new(BrokenStore));

        assert!(!adapter.save(StorageKey::User, &"someone"));
        assert!(!adapter.save_text(StorageKey::Theme, "dark"));
        assert!(adapter.load::<String>(StorageKey::User).is_none());
        assert!(adapter.load_text(StorageKey::Theme).is_none());
        adapter.remove(StorageKey::User);
    }

    #[test]
    fn test_text_is_stored_verbatim() {
        let store = Arc::new(MemoryStore::new());
        let adapter = PersistenceAdapter::new(store.clone());

        adapter.save_text(StorageKey::Theme, "dark");
        assert_eq!(
            store.get(StorageKey::Theme.as_str()).unwrap().as_deref(),
            Some("dark")
        );
    }
}
