//! # Even Interleaver
//!
//! Merges sources in fixed-order round-robin passes: pass `k` emits, in
//! source order, the `k`-th not-yet-emitted record of every source that
//! still has one. No randomness is involved; the output is a pure function
//! of the input.

use crate::interleaver::Interleaver;
use crate::source::Source;
use tracing::debug;

/// Interleaves sources one record at a time in fixed input order.
///
/// Sources that run out early are skipped in later passes without disturbing
/// the order of the remaining sources.
///
/// # Example
///
/// ```rust
/// use jsonweave::{EvenInterleaver, Interleaver, Source};
///
/// let sources = vec![
///   Source::new("a", vec!["a1", "a2", "a3"]),
///   Source::new("b", vec!["b1"]),
///   Source::new("c", vec!["c1", "c2"]),
/// ];
///
/// let merged = EvenInterleaver::new().interleave(sources);
/// assert_eq!(merged, vec!["a1", "b1", "c1", "a2", "c2", "a3"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EvenInterleaver;

impl EvenInterleaver {
  /// Creates an even interleaver.
  #[must_use]
  pub fn new() -> Self {
    Self
  }
}

impl<T: Clone> Interleaver<T> for EvenInterleaver {
  fn interleave(&mut self, mut sources: Vec<Source<T>>) -> Vec<T> {
    let total: usize = sources.iter().map(Source::remaining).sum();
    debug!(sources = sources.len(), records = total, "even interleave");

    let mut output = Vec::with_capacity(total);
    while output.len() < total {
      for source in &mut sources {
        if let Some(record) = source.take_next() {
          output.push(record);
        }
      }
    }
    output
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tagged(source_index: usize, len: usize) -> Source<(usize, usize)> {
    let records = (0..len).map(|seq| (source_index, seq)).collect();
    Source::new(format!("s{}", source_index), records)
  }

  #[test]
  fn test_even_pass_structure() {
    // Lengths [3, 1, 2]: pass one visits every source, pass two skips the
    // exhausted middle source, pass three is the first source alone.
    let sources = vec![tagged(0, 3), tagged(1, 1), tagged(2, 2)];
    let merged = EvenInterleaver::new().interleave(sources);

    let tags: Vec<usize> = merged.iter().map(|(src, _)| *src).collect();
    assert_eq!(tags, vec![0, 1, 2, 0, 2, 0]);
  }

  #[test]
  fn test_even_is_deterministic() {
    let build = || vec![tagged(0, 4), tagged(1, 2), tagged(2, 5)];

    let first = EvenInterleaver::new().interleave(build());
    let second = EvenInterleaver::new().interleave(build());
    assert_eq!(first, second);
  }

  #[test]
  fn test_even_preserves_source_local_order() {
    let sources = vec![tagged(0, 6), tagged(1, 3)];
    let merged = EvenInterleaver::new().interleave(sources);

    assert_eq!(merged.len(), 9);
    for source_index in 0..2 {
      let emitted: Vec<usize> = merged
        .iter()
        .filter(|(src, _)| *src == source_index)
        .map(|(_, seq)| *seq)
        .collect();
      let expected: Vec<usize> = (0..emitted.len()).collect();
      assert_eq!(emitted, expected);
    }
  }

  #[test]
  fn test_even_skips_initially_empty_source() {
    let sources = vec![
      Source::new("empty", vec![]),
      Source::new("a", vec![1, 2]),
      Source::new("b", vec![3]),
    ];
    let merged = EvenInterleaver::new().interleave(sources);
    assert_eq!(merged, vec![1, 3, 2]);
  }

  #[test]
  fn test_even_all_sources_empty() {
    let sources: Vec<Source<i32>> =
      vec![Source::new("a", vec![]), Source::new("b", vec![])];
    let merged = EvenInterleaver::new().interleave(sources);
    assert!(merged.is_empty());
  }
}
