// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Content mapping and merge rules

use serde_json::Value;

/// Live field mapping of a persisted object.
///
/// Deep equality over `Content` (and any nested `Value`) compares
/// structurally: mapping key order is irrelevant, sequences compare
/// element-wise.
pub type Content = serde_json::Map<String, Value>;

/// Merge a persisted snapshot over configured defaults.
///
/// Field-wise at the top level: a field present in `persisted` wins with its
/// nested structure taken verbatim, a field only in `defaults` falls back to
/// the default. Fields are never merged recursively.
pub fn merge(defaults: &Content, persisted: Content) -> Content {
    let mut merged = defaults.clone();
    for (field, value) in persisted {
        merged.insert(field, value);
    }
    merged
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
