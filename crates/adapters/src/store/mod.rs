// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Key-value store contract and backends

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStore, StoreCall};

use stash_core::Backend;
use std::sync::Arc;
use thiserror::Error;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Adapter for single-key string storage.
///
/// Calls are synchronous and atomic at single-key granularity; the store
/// offers no transactions across keys and no batching. Persisted object
/// mutations call `set` immediately, so implementations must be safe to call
/// from the mutation path.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under a key, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under a key
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key and its value; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// One store per backend namespace.
///
/// The two namespaces are fully isolated: the same key names different
/// entries in each.
#[derive(Clone)]
pub struct Backends {
    session: Arc<dyn KeyValueStore>,
    local: Arc<dyn KeyValueStore>,
}

impl Backends {
    pub fn new(session: Arc<dyn KeyValueStore>, local: Arc<dyn KeyValueStore>) -> Self {
        Self { session, local }
    }

    /// Two isolated in-memory namespaces, for tests and ephemeral use
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()))
    }

    /// The store behind a backend selector
    pub fn for_backend(&self, backend: Backend) -> &Arc<dyn KeyValueStore> {
        match backend {
            Backend::Session => &self.session,
            Backend::Local => &self.local,
        }
    }
}
