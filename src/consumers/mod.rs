//! # Consumers Module
//!
//! Consumers persist the merged record array after an interleave run. A
//! consumer either writes the whole output or fails; a failed write leaves
//! no partial result to act on.

/// The JSON file consumer implementation.
pub mod json_file;

pub use json_file::JsonFileConsumer;
