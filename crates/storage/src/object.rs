// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Change-tracked objects persisted to a key-value store

use serde_json::Value;
use stash_adapters::{Backends, KeyValueStore, StoreError};
use stash_core::{codec, content, path, Backend, CodecError, Content, ObjectConfig, PathError};
use std::sync::Arc;
use thiserror::Error;

/// Errors from persisted object operations
#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("path error: {0}")]
    Path(#[from] PathError),
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// An object whose fields mirror a serialized snapshot in a key-value store.
///
/// Every mutation re-serializes the full content and writes it under the
/// object's storage key, so after any successful `set` or `reset` the stored
/// snapshot decodes to exactly the in-memory content. The initial content
/// supplied at creation is kept untouched as the baseline for [`Self::reset`]
/// and [`Self::is_initial_content`].
pub struct PersistedObject {
    storage_key: String,
    backend: Backend,
    initial_content: Content,
    content: Content,
    store: Arc<dyn KeyValueStore>,
}

impl PersistedObject {
    /// Create an object from its configuration, loading any prior snapshot.
    ///
    /// A snapshot already stored under the configured key is merged over a
    /// copy of the initial content, field by field at the top level. An
    /// absent, unreadable, or malformed snapshot falls back to the defaults
    /// alone. The resulting content is written back immediately so the store
    /// and memory agree from the start.
    pub fn create(config: ObjectConfig, backends: &Backends) -> Result<Self, ObjectError> {
        let store = Arc::clone(backends.for_backend(config.backend));
        let content = match Self::load(store.as_ref(), &config.storage_key) {
            Some(persisted) => content::merge(&config.initial_content, persisted),
            None => config.initial_content.clone(),
        };

        let object = Self {
            storage_key: config.storage_key,
            backend: config.backend,
            initial_content: config.initial_content,
            content,
            store,
        };
        object.persist()?;
        Ok(object)
    }

    // Load failures are non-fatal: the object falls back to its defaults.
    fn load(store: &dyn KeyValueStore, key: &str) -> Option<Content> {
        let raw = match store.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key, error = %e, "read failed, using defaults");
                return None;
            }
        };
        match codec::decode(&raw) {
            Ok(persisted) => Some(persisted),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored snapshot is malformed, using defaults");
                None
            }
        }
    }

    /// Read the value at a dotted path. No I/O.
    ///
    /// Returns `None` when any segment of the path does not exist.
    pub fn get(&self, field_path: &str) -> Option<&Value> {
        path::resolve(&self.content, field_path)
    }

    /// Write a value at a dotted path, creating intermediate objects as
    /// needed, then persist the full snapshot in one store write.
    pub fn set(&mut self, field_path: &str, value: Value) -> Result<(), ObjectError> {
        path::write(&mut self.content, field_path, value)?;
        self.persist()
    }

    /// Restore content to the configured defaults and persist.
    ///
    /// Fields added since creation are dropped.
    pub fn reset(&mut self) -> Result<(), ObjectError> {
        self.content = self.initial_content.clone();
        self.persist()
    }

    /// Remove the persisted snapshot from the store.
    ///
    /// In-memory content is untouched; the object is no longer synchronized
    /// until the next `set` or `reset` recreates the key.
    pub fn clear(&self) -> Result<(), ObjectError> {
        self.store.remove(&self.storage_key)?;
        tracing::debug!(key = %self.storage_key, "cleared");
        Ok(())
    }

    /// Whether content is deeply equal to the configured defaults. No I/O.
    pub fn is_initial_content(&self) -> bool {
        self.content == self.initial_content
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Current live field set
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Baseline field set supplied at creation
    pub fn initial_content(&self) -> &Content {
        &self.initial_content
    }

    // One whole-snapshot write; the store interface is whole-value get/set,
    // so there is no incremental patching.
    fn persist(&self) -> Result<(), ObjectError> {
        let snapshot = codec::encode(&self.content)?;
        self.store.set(&self.storage_key, &snapshot)?;
        tracing::debug!(key = %self.storage_key, bytes = snapshot.len(), "persisted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "object_tests.rs"]
mod tests;
