// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! String codec for persisted snapshots

use crate::content::Content;
use serde_json::Value;
use thiserror::Error;

/// Errors from snapshot encoding and decoding
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a json object at the top level")]
    NotAnObject,
}

/// Serialize content to its stored string form.
///
/// Deterministic: the underlying map is key-ordered, so equal content always
/// encodes to the same string.
pub fn encode(content: &Content) -> Result<String, CodecError> {
    Ok(serde_json::to_string(content)?)
}

/// Decode a stored string back into content.
pub fn decode(raw: &str) -> Result<Content, CodecError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(CodecError::NotAnObject),
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
