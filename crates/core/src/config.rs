// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Object configuration

use crate::content::Content;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Which key-value namespace an object lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Process-lifetime namespace
    Session,
    /// Durable namespace
    Local,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Session => write!(f, "session"),
            Backend::Local => write!(f, "local"),
        }
    }
}

/// Configuration for a persisted object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectConfig {
    /// Key under which the serialized snapshot lives in the store
    pub storage_key: String,
    /// Baseline field set; objects deep-copy this at creation
    pub initial_content: Content,
    pub backend: Backend,
}

impl ObjectConfig {
    pub fn new(storage_key: impl Into<String>, backend: Backend) -> Self {
        Self {
            storage_key: storage_key.into(),
            initial_content: Content::new(),
            backend,
        }
    }

    /// Add a default field to the initial content
    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.initial_content.insert(field.into(), value);
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
