//! Shared helpers for spec tests.

pub use serde_json::{json, Value};
pub use similar_asserts::assert_eq;
pub use stash_adapters::{Backends, FileStore, KeyValueStore, MemoryStore};
pub use stash_core::{Backend, ObjectConfig};
pub use stash_storage::PersistedObject;
pub use std::path::Path;
pub use std::sync::Arc;

/// Backends with an in-memory session store and a file-backed local store
pub fn disk_backends(dir: &Path) -> Backends {
    let local = FileStore::open(dir).unwrap();
    Backends::new(Arc::new(MemoryStore::new()), Arc::new(local))
}

/// Decode the snapshot a file-backed local store holds under a key
pub fn read_snapshot(dir: &Path, key: &str) -> Option<Value> {
    let store = FileStore::open(dir).unwrap();
    store
        .get(key)
        .unwrap()
        .map(|raw| serde_json::from_str(&raw).unwrap())
}
