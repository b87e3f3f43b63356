//! Key-Value store wrapper with automatic serialization.

use crate::store::{FileStore, KvStore, MemoryStore};
use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Type-safe cache over a [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Clones share the same backend.
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn KvStore>,
}

impl Cache {
    /// Wrap an existing backend.
    pub fn new(store: impl KvStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// An in-memory cache.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// A cache persisted as JSON files under `dir`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use mickeys_cache::Cache;
    /// let cache = Cache::open_dir(".mickeys/sessions")?;
    /// # Ok::<(), mickeys_cache::CacheError>(())
    /// ```
    pub fn open_dir(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        Ok(Self::new(FileStore::open(dir)?))
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value. Deleting a missing key succeeds.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.get_keys()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```rust
/// let key = mickeys_cache::cache_key!("session", "sess_abc");
/// assert_eq!(key, "session:sess_abc");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Note {
        text: String,
        count: u32,
    }

    #[test]
    fn test_typed_round_trip() {
        let cache = Cache::in_memory();
        let note = Note {
            text: "table by the window".to_string(),
            count: 2,
        };
        cache.set("note:1", &note).unwrap();
        assert_eq!(cache.get::<Note>("note:1").unwrap(), Some(note));
        assert_eq!(cache.get::<Note>("note:2").unwrap(), None);
    }

    #[test]
    fn test_wrong_shape_is_serialize_error() {
        let cache = Cache::in_memory();
        cache.set("note:1", &"just a string").unwrap();
        assert!(matches!(
            cache.get::<Note>("note:1"),
            Err(CacheError::SerializeError(_))
        ));
    }

    #[test]
    fn test_clones_share_backend() {
        let cache = Cache::in_memory();
        let other = cache.clone();
        cache.set("k", &1u8).unwrap();
        assert!(other.exists("k").unwrap());
        other.delete("k").unwrap();
        assert!(cache.keys().unwrap().is_empty());
    }

    #[test]
    fn test_cache_key_macro() {
        assert_eq!(cache_key!("cart", "abc", 3), "cart:abc:3");
    }
}
