//! # Interleaver Trait
//!
//! The seam between the pipeline and the two interleaving policies. An
//! interleaver consumes a set of sources and produces one flat record list;
//! which source contributes the next record is the only thing a policy
//! decides.

use crate::source::Source;

/// A policy that merges a set of sources into one flat record list.
///
/// Implementations take exclusive ownership of the sources for the duration
/// of the call and drain them completely: every record present across all
/// sources appears exactly once in the output, and each source's internal
/// relative order is preserved. Only the interleaving of *different* sources
/// varies between policies.
///
/// Implementations do not validate the at-least-two-sources precondition;
/// that belongs to the caller layer ([`WeavePipeline`](crate::WeavePipeline)).
/// Given a single source, an interleaver degenerates to plain concatenation.
pub trait Interleaver<T: Clone> {
  /// Drains every source and returns the merged record list.
  fn interleave(&mut self, sources: Vec<Source<T>>) -> Vec<T>;
}
