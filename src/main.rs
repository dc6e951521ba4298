//! Command-line shell around the jsonweave library: load the inputs, run one
//! interleave operation, persist the merged array. Exits non-zero on any
//! failure without writing partial output.

use clap::Parser;
use jsonweave::consumers::JsonFileConsumer;
use jsonweave::producers::JsonFileProducer;
use jsonweave::WeavePipeline;

mod cli;

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt::init();
  let cli = cli::Cli::parse();
  run(cli)
}

fn run(cli: cli::Cli) -> anyhow::Result<()> {
  let mut pipeline = WeavePipeline::new().with_policy(cli.policy);
  if let Some(seed) = cli.seed {
    pipeline = pipeline.with_seed(seed);
  }
  for path in &cli.inputs {
    pipeline = pipeline.add_source(JsonFileProducer::new(path).produce()?);
  }
  let merged = pipeline.run()?;

  let mut consumer = JsonFileConsumer::new(&cli.output);
  if cli.compact {
    consumer = consumer.with_compact();
  }
  consumer.consume(&merged)?;
  Ok(())
}
