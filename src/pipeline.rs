//! # Weave Pipeline
//!
//! The caller layer for one interleave operation. The pipeline owns the
//! at-least-two-sources check, policy dispatch, and generator construction;
//! the interleavers themselves stay free of validation and hidden
//! randomness.

use crate::error::WeaveError;
use crate::interleaver::Interleaver;
use crate::interleavers::{EvenInterleaver, WeightedInterleaver};
use crate::policy::InterleavePolicy;
use crate::source::{Record, Source};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// One interleave operation: sources in, a single merged record list out.
///
/// Sources are drained in the order they were added; `run` consumes the
/// pipeline, so an operation either completes over all sources or fails
/// before touching any record. There is no partial output.
///
/// # Example
///
/// ```rust
/// use jsonweave::{InterleavePolicy, Source, WeavePipeline};
/// use serde_json::json;
///
/// let merged = WeavePipeline::new()
///   .with_policy(InterleavePolicy::Weighted)
///   .with_seed(42)
///   .add_source(Source::new("a", vec![json!({"id": 1}), json!({"id": 2})]))
///   .add_source(Source::new("b", vec![json!({"id": 3})]))
///   .run()?;
///
/// assert_eq!(merged.len(), 3);
/// # Ok::<(), jsonweave::WeaveError>(())
/// ```
#[derive(Debug, Default)]
pub struct WeavePipeline {
  sources: Vec<Source<Record>>,
  policy: InterleavePolicy,
  seed: Option<u64>,
}

impl WeavePipeline {
  /// Creates an empty pipeline with the default (weighted) policy.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the interleave policy.
  #[must_use]
  pub fn with_policy(mut self, policy: InterleavePolicy) -> Self {
    self.policy = policy;
    self
  }

  /// Seeds the weighted policy's generator for reproducible output.
  ///
  /// The even policy uses no randomness and ignores the seed.
  #[must_use]
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  /// Adds one source; input order is the order sources were added.
  #[must_use]
  pub fn add_source(mut self, source: Source<Record>) -> Self {
    self.sources.push(source);
    self
  }

  /// Number of sources added so far.
  #[must_use]
  pub fn source_count(&self) -> usize {
    self.sources.len()
  }

  /// Runs the interleave and returns the merged records.
  ///
  /// Fails with [`WeaveError::TooFewSources`] before touching any record if
  /// fewer than two sources were added.
  pub fn run(self) -> Result<Vec<Record>, WeaveError> {
    if self.sources.len() < 2 {
      return Err(WeaveError::TooFewSources {
        count: self.sources.len(),
      });
    }

    let total: usize = self.sources.iter().map(Source::len).sum();
    info!(
      policy = %self.policy,
      sources = self.sources.len(),
      records = total,
      "interleaving"
    );

    let mut interleaver: Box<dyn Interleaver<Record>> = match self.policy {
      InterleavePolicy::Weighted => {
        let rng = match self.seed {
          Some(seed) => StdRng::seed_from_u64(seed),
          None => StdRng::from_entropy(),
        };
        Box::new(WeightedInterleaver::new(rng))
      }
      InterleavePolicy::Even => Box::new(EvenInterleaver::new()),
    };
    Ok(interleaver.interleave(self.sources))
  }
}
