//! # JSON File Consumer
//!
//! Writes a record array to one JSON file. Output is pretty-printed with a
//! four-space indent by default, matching the layout of hand-authored input
//! files; the compact single-line form is available for machine consumers.

use crate::error::WeaveError;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Persists one merged record array as a JSON file.
///
/// # Example
///
/// ```rust,no_run
/// use jsonweave::consumers::JsonFileConsumer;
/// use serde_json::json;
///
/// let records = vec![json!({"id": 1}), json!({"id": 2})];
/// JsonFileConsumer::new("merged.json").consume(&records)?;
/// # Ok::<(), jsonweave::WeaveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileConsumer {
  path: PathBuf,
  compact: bool,
}

impl JsonFileConsumer {
  /// Creates a consumer writing to the given file path.
  #[must_use]
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      compact: false,
    }
  }

  /// Switches output to the compact single-line form.
  #[must_use]
  pub fn with_compact(mut self) -> Self {
    self.compact = true;
    self
  }

  /// The file this consumer writes.
  #[must_use]
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Serializes the records as one JSON array and writes it out.
  ///
  /// The file is created or truncated. The write either completes for the
  /// whole array or fails; nothing is appended incrementally.
  pub fn consume<T: Serialize>(&self, records: &[T]) -> Result<(), WeaveError> {
    let file = File::create(&self.path).map_err(|source| WeaveError::Io {
      path: self.path.clone(),
      source,
    })?;
    let mut writer = BufWriter::new(file);

    if self.compact {
      serde_json::to_writer(&mut writer, records).map_err(|source| WeaveError::Persist {
        path: self.path.clone(),
        source,
      })?;
    } else {
      let formatter = PrettyFormatter::with_indent(b"    ");
      let mut serializer = Serializer::with_formatter(&mut writer, formatter);
      records
        .serialize(&mut serializer)
        .map_err(|source| WeaveError::Persist {
          path: self.path.clone(),
          source,
        })?;
    }

    writer.flush().map_err(|source| WeaveError::Io {
      path: self.path.clone(),
      source,
    })?;

    info!(path = %self.path.display(), records = records.len(), "wrote output");
    Ok(())
  }
}
