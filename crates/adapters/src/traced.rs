// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrapper for consistent observability

use crate::store::{KeyValueStore, StoreError};

/// Wrapper that adds tracing to any KeyValueStore
#[derive(Clone)]
pub struct TracedStore<S> {
    inner: S,
    name: &'static str,
}

impl<S> TracedStore<S> {
    /// Wrap a store; `name` labels the namespace in trace output
    pub fn new(inner: S, name: &'static str) -> Self {
        Self { inner, name }
    }
}

impl<S: KeyValueStore> KeyValueStore for TracedStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let span = tracing::debug_span!("store.get", store = self.name, key);
        let _guard = span.enter();

        let result = self.inner.get(key);
        match &result {
            Ok(Some(value)) => tracing::debug!(bytes = value.len(), "hit"),
            Ok(None) => tracing::debug!("miss"),
            Err(e) => tracing::error!(error = %e, "get failed"),
        }
        result
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let span = tracing::debug_span!("store.set", store = self.name, key);
        let _guard = span.enter();

        let result = self.inner.set(key, value);
        match &result {
            Ok(()) => tracing::debug!(bytes = value.len(), "written"),
            Err(e) => tracing::error!(error = %e, "set failed"),
        }
        result
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let span = tracing::debug_span!("store.remove", store = self.name, key);
        let _guard = span.enter();

        let result = self.inner.remove(key);
        match &result {
            Ok(()) => tracing::debug!("removed"),
            Err(e) => tracing::error!(error = %e, "remove failed"),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
