//! Key-value persistence for the scoreboard.
//!
//! The scoreboard stores a handful of string values under fixed keys, the
//! way a browser's local storage would. [`KeyValueStore`] abstracts the
//! backing store; [`load_snapshot`] and [`save_snapshot`] map the match,
//! stake and preferences onto those keys.

mod memory;
mod file;
mod snapshot;

pub use memory::MemoryStore;
pub use file::FileStore;
pub use snapshot::{load_snapshot, save_snapshot, Snapshot, StorageKeys, DEFAULT_PREFIX};

use crate::error::Result;

/// String key-value store.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Deleting an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Apply a batch of writes; `None` deletes the key.
    ///
    /// The default applies each write in turn and stops at the first error,
    /// so earlier writes stay applied. Stores that can write the batch as a
    /// unit override this and apply all of it or none.
    fn set_many(&mut self, writes: &[(&str, Option<&str>)]) -> Result<()> {
        for &(key, value) in writes {
            match value {
                Some(value) => self.set(key, value)?,
                None => self.remove(key)?,
            }
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn set_many(&mut self, writes: &[(&str, Option<&str>)]) -> Result<()> {
        (**self).set_many(writes)
    }
}
