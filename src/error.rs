//! # Error Handling
//!
//! Single error type for interleave operations and the surrounding file
//! shell. Every failure aborts the whole operation: no variant is retried,
//! no variant is recovered from internally, and no partial output is ever
//! surfaced to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for jsonweave operations.
#[derive(Error, Debug)]
pub enum WeaveError {
  /// Fewer than two sources were supplied for an interleave run.
  #[error("at least two sources are required, got {count}")]
  TooFewSources {
    /// Number of sources actually supplied.
    count: usize,
  },
  /// Reading an input file or writing the output file failed.
  #[error("io error on {}: {source}", .path.display())]
  Io {
    /// The file being read or written.
    path: PathBuf,
    /// The underlying I/O error.
    source: std::io::Error,
  },
  /// An input file is not valid JSON.
  #[error("failed to parse {}: {source}", .path.display())]
  Parse {
    /// The offending input file.
    path: PathBuf,
    /// The underlying parse error.
    source: serde_json::Error,
  },
  /// An input file parsed to something other than a top-level JSON array.
  #[error("input {} is not a JSON array of records", .path.display())]
  NotAnArray {
    /// The offending input file.
    path: PathBuf,
  },
  /// Serializing the merged output failed mid-write.
  #[error("failed to write {}: {source}", .path.display())]
  Persist {
    /// The output file being written.
    path: PathBuf,
    /// The underlying serialization error.
    source: serde_json::Error,
  },
}
