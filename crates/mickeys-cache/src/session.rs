//! Session management on top of [`Cache`].

use crate::{Cache, CacheError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// A unique session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random session ID: `sess_` plus 18 random bytes in
    /// URL-safe base64.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Session data as stored in the cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData<T> {
    pub id: SessionId,
    pub data: T,
    /// Incremented on every write.
    pub version: u64,
    /// Unix timestamp of the first write.
    pub created_at: u64,
    /// Unix timestamp of the latest write.
    pub last_accessed: u64,
}

/// Typed sessions stored under `session:<id>`.
///
/// # Example
///
/// ```rust
/// use mickeys_cache::{Cache, Session, SessionId};
///
/// let sessions = Session::<Vec<String>>::new(Cache::in_memory());
/// let id = SessionId::generate();
///
/// let mut visited = sessions.get_or_create(&id)?;
/// visited.push("menu".to_string());
/// sessions.set(&id, &visited)?;
///
/// assert_eq!(sessions.get(&id)?, Some(vec!["menu".to_string()]));
/// # Ok::<(), mickeys_cache::CacheError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session<T> {
    cache: Cache,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Session<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    pub fn new(cache: Cache) -> Self {
        Self {
            cache,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get session data, or create a new session if it doesn't exist.
    pub fn get_or_create(&self, id: &SessionId) -> Result<T, CacheError> {
        match self.get_versioned(id)? {
            Some(session_data) => Ok(session_data.data),
            None => {
                let data = T::default();
                self.write(id, &data, None)?;
                debug!(session = %id, "Created session");
                Ok(data)
            }
        }
    }

    /// Get session data if it exists.
    pub fn get(&self, id: &SessionId) -> Result<Option<T>, CacheError> {
        Ok(self.get_versioned(id)?.map(|s| s.data))
    }

    /// Get full session data including version.
    pub fn get_versioned(&self, id: &SessionId) -> Result<Option<SessionData<T>>, CacheError> {
        self.cache.get::<SessionData<T>>(&session_key(id))
    }

    /// Set session data (unconditional write).
    pub fn set(&self, id: &SessionId, data: &T) -> Result<(), CacheError> {
        let previous = self.get_versioned(id)?;
        self.write(id, data, previous.as_ref())?;
        Ok(())
    }

    /// Delete a session. Deleting a missing session succeeds.
    pub fn delete(&self, id: &SessionId) -> Result<(), CacheError> {
        self.cache.delete(&session_key(id))?;
        debug!(session = %id, "Deleted session");
        Ok(())
    }

    pub fn exists(&self, id: &SessionId) -> Result<bool, CacheError> {
        self.cache.exists(&session_key(id))
    }

    fn write(
        &self,
        id: &SessionId,
        data: &T,
        previous: Option<&SessionData<T>>,
    ) -> Result<(), CacheError> {
        let now = unix_now();
        let session_data = SessionData {
            id: id.clone(),
            data: data.clone(),
            version: previous.map(|s| s.version + 1).unwrap_or(1),
            created_at: previous.map(|s| s.created_at).unwrap_or(now),
            last_accessed: now,
        };
        self.cache.set(&session_key(id), &session_data)
    }
}

fn session_key(id: &SessionId) -> String {
    crate::cache_key!("session", id)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KvStore, MemoryStore};

    /// Accepts reads and writes but refuses deletes.
    struct NoDelete(MemoryStore);

    impl KvStore for NoDelete {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
            self.0.set(key, value)
        }
        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::StoreError("delete refused".to_string()))
        }
        fn exists(&self, key: &str) -> Result<bool, CacheError> {
            self.0.exists(key)
        }
        fn get_keys(&self) -> Result<Vec<String>, CacheError> {
            self.0.get_keys()
        }
    }

    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    struct Visit {
        pages: Vec<String>,
    }

    fn sessions() -> Session<Visit> {
        Session::new(Cache::in_memory())
    }

    #[test]
    fn test_session_id_generate_format() {
        let id = SessionId::generate();
        let s = id.as_str();

        assert!(s.starts_with("sess_"));
        // 18 bytes of base64 = 24 chars, plus "sess_".
        assert_eq!(s.len(), 29);
        assert!(s[5..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_session_id_generate_uniqueness() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn test_session_id_serialization() {
        let id = SessionId::new("serialize-me");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""serialize-me""#);
        assert_eq!(serde_json::from_str::<SessionId>(&json).unwrap(), id);
    }

    #[test]
    fn test_get_or_create_persists_default() {
        let sessions = sessions();
        let id = SessionId::new("abc");

        assert!(!sessions.exists(&id).unwrap());
        assert_eq!(sessions.get_or_create(&id).unwrap(), Visit::default());
        assert!(sessions.exists(&id).unwrap());
        assert_eq!(sessions.get_versioned(&id).unwrap().unwrap().version, 1);
    }

    #[test]
    fn test_set_bumps_version_and_keeps_created_at() {
        let sessions = sessions();
        let id = SessionId::new("abc");
        let visit = Visit {
            pages: vec!["menu".to_string()],
        };

        sessions.set(&id, &Visit::default()).unwrap();
        let first = sessions.get_versioned(&id).unwrap().unwrap();
        sessions.set(&id, &visit).unwrap();
        let second = sessions.get_versioned(&id).unwrap().unwrap();

        assert_eq!(second.version, 2);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.data, visit);
    }

    #[test]
    fn test_set_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id = SessionId::new("abc");
        let visit = Visit {
            pages: vec!["menu".to_string(), "cart".to_string()],
        };

        Session::<Visit>::new(Cache::open_dir(dir.path()).unwrap())
            .set(&id, &visit)
            .unwrap();

        let reopened = Session::<Visit>::new(Cache::open_dir(dir.path()).unwrap());
        assert_eq!(reopened.get(&id).unwrap(), Some(visit));
    }

    #[test]
    fn test_delete() {
        let sessions = sessions();
        let id = SessionId::new("abc");
        sessions.get_or_create(&id).unwrap();

        sessions.delete(&id).unwrap();
        assert_eq!(sessions.get(&id).unwrap(), None);
        sessions.delete(&id).unwrap();
    }

    #[test]
    fn test_delete_failure_keeps_session() {
        let sessions = Session::<Visit>::new(Cache::new(NoDelete(MemoryStore::new())));
        let id = SessionId::new("abc");
        sessions.get_or_create(&id).unwrap();

        assert!(matches!(
            sessions.delete(&id),
            Err(CacheError::StoreError(_))
        ));
        assert!(sessions.exists(&id).unwrap());
    }

    #[test]
    fn test_session_key_namespace() {
        let cache = Cache::in_memory();
        let sessions = Session::<Visit>::new(cache.clone());
        sessions.get_or_create(&SessionId::new("xyz")).unwrap();
        assert_eq!(cache.keys().unwrap(), vec!["session:xyz"]);
    }
}
