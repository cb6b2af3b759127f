use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

use super::backend::{KeyValueStorage, MemoryStorage};
use super::error::Result;

/// Best-effort JSON document persistence over a [`KeyValueStorage`].
///
/// Failures never reach the caller: `load` falls back to the supplied default and
/// `save` reports `false`. Clones share the same backend.
#[derive(Clone)]
pub struct PersistentStore {
    backend: Rc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for PersistentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PersistentStore")
    }
}

impl PersistentStore {
    pub fn new(backend: Rc<dyn KeyValueStorage>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(target: "storage", "Nothing stored under {}, using default", key);
                default
            }
            Err(e) => {
                warn!(target: "storage", "Failed to load {}: {}", key, e);
                default
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!(target: "storage", "Failed to save {}: {}", key, e);
                false
            }
        }
    }

    pub fn remove(&self, key: &str) -> bool {
        match self.backend.remove_item(key) {
            Ok(()) => true,
            Err(e) => {
                warn!(target: "storage", "Failed to remove {}: {}", key, e);
                false
            }
        }
    }

    fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get_item(key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let contents = serde_json::to_string(value)?;
        self.backend.set_item(key, &contents)
    }
}
