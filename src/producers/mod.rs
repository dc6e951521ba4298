//! # Producers Module
//!
//! Producers load input data into [`Source`](crate::Source)s before an
//! interleave run. A producer that fails contributes nothing: the run is
//! aborted before the interleave is ever invoked.

/// The JSON file producer implementation.
pub mod json_file;

pub use json_file::JsonFileProducer;
