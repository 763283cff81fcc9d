#![warn(missing_docs)]
//! SynthBench CLI Library
//!
//! Entry point for the `synthbench` binary. The suite takes no arguments:
//! every run uses the default sizes and entropy-seeded randomness.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     synthbench_cli::run()
//! }
//! ```

mod executor;

pub use executor::{Executor, run_suite};

use anyhow::Context;
use clap::Parser;
use synthbench_core::{RngSource, SuiteConfig, SuiteContext};

/// SynthBench CLI arguments (none besides `--help` and `--version`)
#[derive(Parser, Debug)]
#[command(name = "synthbench")]
#[command(
    author,
    version,
    about = "SynthBench - fixed-order CPU and memory micro-benchmarks"
)]
pub struct Cli {}

/// Run the SynthBench CLI.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if the suite could not be set up
/// or its output could not be written.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SynthBench CLI with pre-parsed arguments.
pub fn run_with_cli(_cli: Cli) -> anyhow::Result<()> {
    init_logging();

    let ctx = SuiteContext::new(SuiteConfig::default(), RngSource::Entropy)
        .context("failed to prepare benchmark suite")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_suite(&ctx, synthbench_workloads::suite(), &mut out)
        .context("failed to write benchmark results")?;

    Ok(())
}

/// Install the global subscriber. Logs go to stderr; stdout carries only the results.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("synthbench=info")
        .with_writer(std::io::stderr)
        .init();
}
