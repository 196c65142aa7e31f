//! DashTools preference storage
//!
//! A small synchronous key/value contract shaped after browser local storage:
//! string keys, string values, local and blocking. Two backends ship with the
//! crate, an in-memory map for tests and embedding, and a JSON file for
//! persisting preferences between runs.

pub mod error;
pub mod file;
pub mod memory;

pub use error::{StorageError, StorageResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Synchronous string key/value storage
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> StorageResult<()>;

    /// Remove every key
    fn clear(&self) -> StorageResult<()>;
}
