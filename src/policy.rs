//! # Interleave Policy
//!
//! The closed set of rules determining emission order across sources.

use clap::ValueEnum;
use std::fmt;

/// The rule determining emission order across sources.
///
/// Weighted is the default; even round-robin is the deterministic
/// alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InterleavePolicy {
  /// Pick the next source at random, weighted by remaining record count.
  #[default]
  Weighted,
  /// Emit one record per non-empty source per pass, in input order.
  Even,
}

impl fmt::Display for InterleavePolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InterleavePolicy::Weighted => write!(f, "weighted"),
      InterleavePolicy::Even => write!(f, "even"),
    }
  }
}
