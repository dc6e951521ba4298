//! # Record and Source Containers
//!
//! A [`Record`] is one opaque structured value out of an input sequence; a
//! [`Source`] is one ordered sequence of records participating in a single
//! interleave operation.
//!
//! Sources expose their records through an explicit read cursor rather than
//! by physically removing elements: [`Source::take_next`] clones the record
//! under the cursor and advances past it, leaving the backing sequence
//! untouched. Emission order is therefore observably identical to a
//! pop-from-front formulation, without destructive mutation.

use serde_json::Value;

/// One opaque record from an input sequence.
///
/// Records are never inspected or transformed by the interleavers, only
/// relocated into the output.
pub type Record = Value;

/// An ordered sequence of records with an explicit read cursor.
///
/// A source is identified by its position among the inputs supplied for one
/// interleave operation; the name is carried only for logs and diagnostics.
/// The source is exclusively owned by the interleave operation for its
/// duration and is fully drained by the time the operation returns.
#[derive(Debug, Clone)]
pub struct Source<T = Record> {
  name: String,
  records: Vec<T>,
  cursor: usize,
}

impl<T> Source<T> {
  /// Creates a source from a name and its records, cursor at the front.
  #[must_use]
  pub fn new(name: impl Into<String>, records: Vec<T>) -> Self {
    Self {
      name: name.into(),
      records,
      cursor: 0,
    }
  }

  /// Display name used in logs and diagnostics.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Total number of records, independent of cursor position.
  #[must_use]
  pub fn len(&self) -> usize {
    self.records.len()
  }

  /// True if the source held no records to begin with.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Number of records the cursor has not yet passed.
  #[must_use]
  pub fn remaining(&self) -> usize {
    self.records.len() - self.cursor
  }

  /// True once every record has been emitted.
  #[must_use]
  pub fn is_exhausted(&self) -> bool {
    self.remaining() == 0
  }

  /// The record under the cursor, without advancing.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.records.get(self.cursor)
  }
}

impl<T: Clone> Source<T> {
  /// Emits the record under the cursor and advances past it.
  ///
  /// Returns `None` once the source is exhausted.
  pub fn take_next(&mut self) -> Option<T> {
    let record = self.records.get(self.cursor)?.clone();
    self.cursor += 1;
    Some(record)
  }
}
