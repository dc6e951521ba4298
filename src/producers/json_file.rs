//! # JSON File Producer
//!
//! Reads one JSON file containing a top-level array and produces a
//! [`Source`] of its records. The whole file is read and parsed up front;
//! there is no streaming.

use crate::error::WeaveError;
use crate::source::{Record, Source};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads one input file into a source.
///
/// The produced source is named after the file for logs and diagnostics.
/// Input files must be UTF-8 and must parse to a top-level JSON array;
/// anything else aborts the load with no partial source.
///
/// # Example
///
/// ```rust,no_run
/// use jsonweave::producers::JsonFileProducer;
///
/// let source = JsonFileProducer::new("events.json").produce()?;
/// println!("{} records", source.len());
/// # Ok::<(), jsonweave::WeaveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileProducer {
  path: PathBuf,
}

impl JsonFileProducer {
  /// Creates a producer for the given file path.
  #[must_use]
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// The file this producer reads.
  #[must_use]
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Reads and parses the file into a source.
  ///
  /// Fails if the file cannot be read, is not valid JSON, or parses to
  /// anything other than a top-level array.
  pub fn produce(&self) -> Result<Source<Record>, WeaveError> {
    let text = fs::read_to_string(&self.path).map_err(|source| WeaveError::Io {
      path: self.path.clone(),
      source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| WeaveError::Parse {
      path: self.path.clone(),
      source,
    })?;
    let Value::Array(records) = value else {
      return Err(WeaveError::NotAnArray {
        path: self.path.clone(),
      });
    };

    info!(path = %self.path.display(), records = records.len(), "loaded source");
    Ok(Source::new(self.path.display().to_string(), records))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
  }

  #[test]
  fn test_produce_reads_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "records.json", r#"[{"id": 1}, {"id": 2}]"#);

    let source = JsonFileProducer::new(&path).produce().unwrap();
    assert_eq!(source.len(), 2);
    assert_eq!(source.name(), path.display().to_string());
  }

  #[test]
  fn test_produce_accepts_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "empty.json", "[]");

    let source = JsonFileProducer::new(&path).produce().unwrap();
    assert!(source.is_empty());
  }

  #[test]
  fn test_produce_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let result = JsonFileProducer::new(&path).produce();
    assert!(matches!(result, Err(WeaveError::Io { .. })));
  }

  #[test]
  fn test_produce_rejects_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "broken.json", "[{\"id\": 1},");

    let result = JsonFileProducer::new(&path).produce();
    assert!(matches!(result, Err(WeaveError::Parse { .. })));
  }

  #[test]
  fn test_produce_rejects_non_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "object.json", r#"{"records": []}"#);

    let result = JsonFileProducer::new(&path).produce();
    assert!(matches!(result, Err(WeaveError::NotAnArray { .. })));
  }
}
