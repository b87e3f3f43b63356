//! Type-safe key-value storage for Mickey's.
//!
//! Values are stored as JSON over a pluggable [`KvStore`]: an in-memory map
//! for tests and one-shot sessions, or a directory of files so a CLI cart
//! survives between invocations.
//!
//! # Example
//!
//! ```rust
//! use mickeys_cache::Cache;
//!
//! let cache = Cache::in_memory();
//! cache.set("promo:last", &"SAVE10")?;
//! let code: Option<String> = cache.get("promo:last")?;
//! assert_eq!(code.as_deref(), Some("SAVE10"));
//! cache.delete("promo:last")?;
//! # Ok::<(), mickeys_cache::CacheError>(())
//! ```

mod error;
mod kv;
mod session;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use session::{Session, SessionData, SessionId};
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, Session, SessionId};
}
