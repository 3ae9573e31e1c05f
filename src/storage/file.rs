//! File-backed key-value store.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::KeyValueStore;
use crate::error::Result;

/// Key-value store persisted to a single bincode file.
///
/// The whole map is kept in memory and the file is rewritten on every
/// change: written to a temp file first, then renamed over the original.
/// A batch from `set_many` is one rewrite; if it fails, neither the file
/// nor the in-memory map changes.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: FxHashMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file is an empty store. A file that does not decode is an
    /// error; the caller decides whether to start over.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let entries = if path.exists() {
            let bytes = fs::read(&path)?;
            let entries: FxHashMap<String, String> = bincode::deserialize(&bytes)?;
            tracing::debug!("Loaded {} keys from {}", entries.len(), path.display());
            entries
        } else {
            FxHashMap::default()
        };

        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        Self::write_entries(&self.path, &self.entries)
    }

    fn write_entries(path: &Path, entries: &FxHashMap<String, String>) -> Result<()> {
        let bytes = bincode::serialize(entries)?;
        let temp_path = path.with_extension("tmp");

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, path)?;

        tracing::debug!("Saved {} keys to {}", entries.len(), path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn set_many(&mut self, writes: &[(&str, Option<&str>)]) -> Result<()> {
        let mut staged = self.entries.clone();
        for &(key, value) in writes {
            match value {
                Some(value) => {
                    staged.insert(key.to_string(), value.to_string());
                }
                None => {
                    staged.remove(key);
                }
            }
        }

        if staged == self.entries {
            return Ok(());
        }
        Self::write_entries(&self.path, &staged)?;
        self.entries = staged;
        Ok(())
    }
}
