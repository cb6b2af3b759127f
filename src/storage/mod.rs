mod backend;
mod error;
mod file_storage;
mod persistent_store;

pub use backend::{KeyValueStorage, MemoryStorage};
pub use error::{Result, StorageError};
pub use file_storage::FileStorage;
pub use persistent_store::PersistentStore;
