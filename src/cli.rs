//! Command-line argument definitions.

use clap::Parser;
use jsonweave::InterleavePolicy;
use std::path::PathBuf;

/// Merge two or more JSON record files into one interleaved array.
#[derive(Debug, Parser)]
#[command(name = "jsonweave", version, about)]
pub struct Cli {
  /// Input JSON files, each containing a top-level array of records.
  #[arg(required = true, num_args = 2.., value_name = "INPUTS")]
  pub inputs: Vec<PathBuf>,

  /// Path for the merged output array.
  #[arg(short, long, value_name = "OUTPUT")]
  pub output: PathBuf,

  /// How records from different inputs are interleaved.
  #[arg(short, long, value_enum, default_value_t = InterleavePolicy::Weighted)]
  pub policy: InterleavePolicy,

  /// Seed for the weighted policy, for reproducible output.
  #[arg(long)]
  pub seed: Option<u64>,

  /// Write compact JSON instead of pretty-printed.
  #[arg(long)]
  pub compact: bool,
}
