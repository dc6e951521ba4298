//! # jsonweave
//!
//! Merging of ordered JSON record sequences into a single interleaved array.
//!
//! jsonweave takes two or more sources, each an ordered sequence of opaque
//! JSON records, and merges them into one flat sequence under a chosen
//! interleave policy. Records are never inspected or transformed, only
//! relocated; each source's internal order always survives into the output.
//!
//! ## Key Features
//!
//! - **Weighted interleave**: the next record is drawn from a random source,
//!   with probability proportional to that source's remaining record count
//! - **Even interleave**: deterministic round-robin, one record per non-empty
//!   source per pass
//! - **Injectable randomness**: the weighted policy takes its generator from
//!   the caller, so runs can be seeded and replayed
//! - **Whole-file batch model**: every input is held in memory and the output
//!   is emitted as a single array; there is no streaming
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonweave::{InterleavePolicy, Source, WeavePipeline};
//! use serde_json::json;
//!
//! let merged = WeavePipeline::new()
//!   .with_policy(InterleavePolicy::Even)
//!   .add_source(Source::new("a", vec![json!(1), json!(2)]))
//!   .add_source(Source::new("b", vec![json!(3)]))
//!   .run()?;
//!
//! assert_eq!(merged, vec![json!(1), json!(3), json!(2)]);
//! # Ok::<(), jsonweave::WeaveError>(())
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Consumers that persist a merged record array.
pub mod consumers;
/// Error types shared across the crate.
pub mod error;
/// The `Interleaver` trait implemented by both policies.
pub mod interleaver;
/// The two interleaving policy implementations.
pub mod interleavers;
/// Pipeline assembling sources, a policy, and one interleave run.
pub mod pipeline;
/// Interleave policy selection.
pub mod policy;
/// Producers that load input files into sources.
pub mod producers;
/// Record and source containers.
pub mod source;

pub use consumers::JsonFileConsumer;
pub use error::WeaveError;
pub use interleaver::Interleaver;
pub use interleavers::{EvenInterleaver, WeightedInterleaver};
pub use pipeline::WeavePipeline;
pub use policy::InterleavePolicy;
pub use producers::JsonFileProducer;
pub use source::{Record, Source};
