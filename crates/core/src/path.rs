// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dotted-path traversal over nested content

use crate::content::Content;
use serde_json::Value;
use thiserror::Error;

/// Errors from path writes
#[derive(Debug, Error)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("not an object: {0}")]
    NotAnObject(String),
}

/// Resolve a dotted path against content.
///
/// Returns `None` when any segment of the path does not exist, or when an
/// intermediate segment exists but is not an object.
pub fn resolve<'a>(content: &'a Content, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = content.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Write a value at a dotted path, creating intermediate objects as needed.
///
/// Fails with [`PathError::NotAnObject`] when an intermediate segment exists
/// but holds a non-object value; the error carries the path up to and
/// including the offending segment.
pub fn write(content: &mut Content, path: &str, value: Value) -> Result<(), PathError> {
    let mut segments = path.split('.');
    let first = match segments.next() {
        Some(first) if !first.is_empty() => first,
        _ => return Err(PathError::Empty),
    };
    let rest: Vec<&str> = segments.collect();

    let Some((leaf, parents)) = rest.split_last() else {
        content.insert(first.to_string(), value);
        return Ok(());
    };

    let mut walked = first.to_string();
    let mut current = content
        .entry(first.to_string())
        .or_insert_with(|| Value::Object(Content::new()));
    for segment in parents {
        let map = current
            .as_object_mut()
            .ok_or_else(|| PathError::NotAnObject(walked.clone()))?;
        current = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Content::new()));
        walked.push('.');
        walked.push_str(segment);
    }
    let map = current
        .as_object_mut()
        .ok_or(PathError::NotAnObject(walked))?;
    map.insert((*leaf).to_string(), value);
    Ok(())
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
