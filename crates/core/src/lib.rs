// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! stash-core: Data model for key-value persisted objects
//!
//! This crate provides:
//! - The JSON content mapping and its top-level merge rules
//! - Dotted-path traversal over nested content
//! - The string codec used for persisted snapshots
//! - Object configuration (storage key, initial content, backend)

pub mod codec;
pub mod config;
pub mod content;
pub mod path;

// Re-exports
pub use codec::CodecError;
pub use config::{Backend, ObjectConfig};
pub use content::Content;
pub use path::PathError;
