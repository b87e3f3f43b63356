//! Byte-level key-value backends.

use crate::CacheError;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Raw key-value storage. Values are opaque bytes; `Cache` adds JSON on top.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;
    fn delete(&self, key: &str) -> Result<(), CacheError>;
    fn exists(&self, key: &str) -> Result<bool, CacheError>;
    fn get_keys(&self) -> Result<Vec<String>, CacheError>;
}

/// In-process store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, Vec<u8>>) -> R,
    ) -> Result<R, CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::StoreError(e.to_string()))?;
        Ok(f(&mut entries))
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), value.to_vec());
        })
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.with_entries(|entries| entries.contains_key(key))
    }

    fn get_keys(&self) -> Result<Vec<String>, CacheError> {
        self.with_entries(|entries| entries.keys().cloned().collect())
    }
}

/// A directory of JSON files, one per key.
///
/// Keys are escaped into file names so that namespaced keys such as
/// `session:abc` are portable.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

const FILE_SUFFIX: &str = ".json";

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| CacheError::io(&dir, e))?;
        debug!(dir = %dir.display(), "Opened file store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}{}", encode_key(key), FILE_SUFFIX))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::io(&path, e)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.path_for(key);
        // Write then rename so a crash never leaves a truncated entry.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| CacheError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| CacheError::io(&path, e))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::io(&path, e)),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.path_for(key).is_file())
    }

    fn get_keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| CacheError::io(&self.dir, e))?;
        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CacheError::io(&self.dir, e))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(stem) = name.strip_suffix(FILE_SUFFIX) {
                if let Some(key) = decode_key(stem) {
                    keys.push(key);
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Escape every byte outside `[A-Za-z0-9_-]` as `%XX`.
fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

fn decode_key(encoded: &str) -> Option<String> {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = encoded.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
