//! JSON file storage backend
//!
//! The whole store is one JSON object mapping keys to string values. Every
//! operation reads the file fresh, so several handles on the same path observe
//! each other's writes. Writes go to a temporary sibling first and are renamed
//! into place. A file that no longer parses is renamed to `*.corrupt` by the
//! next write, which then starts from an empty map.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use parking_lot::Mutex;

use crate::{
    error::{StorageError, StorageResult},
    KeyValueStore,
};

const DEFAULT_FILE_NAME: &str = "storage.json";
const CORRUPT_EXTENSION: &str = "corrupt";

/// Key/value store persisted to a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store under the platform data directory, e.g. `~/.local/share/dashtools/storage.json`
    pub fn with_default_path() -> StorageResult<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| StorageError::Unavailable("data directory not found".to_string()))?;
        Ok(Self::new(dir.join("dashtools").join(DEFAULT_FILE_NAME)))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, items: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(items)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, content).map_err(|e| StorageError::io(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| StorageError::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), keys = items.len(), "Saved storage file");
        Ok(())
    }

    /// Move an unreadable backing file out of the way so writes can proceed
    fn set_aside(&self, path: &Path, source: &serde_json::Error) -> StorageResult<()> {
        let backup = path.with_extension(CORRUPT_EXTENSION);
        tracing::warn!(
            "Storage file {} is unreadable ({}), moving it to {}",
            path.display(),
            source,
            backup.display()
        );
        fs::rename(path, &backup).map_err(|e| StorageError::io(path, e))
    }

    fn update<F>(&self, f: F) -> StorageResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.write_lock.lock();
        let mut items = match self.load() {
            Ok(items) => items,
            Err(StorageError::Parse { path, source }) => {
                self.set_aside(&path, &source)?;
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        f(&mut items);
        self.save(&items)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|items| {
            items.remove(key);
        })
    }

    fn clear(&self) -> StorageResult<()> {
        let _guard = self.write_lock.lock();
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        }
        Ok(())
    }
}
