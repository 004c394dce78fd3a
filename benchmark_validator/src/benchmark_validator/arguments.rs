//!
//! The benchmark validator arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark validator arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Benchmark results file in the Google Benchmark JSON format.
    pub input_path: PathBuf,

    /// Maximum acceptable real time of an iteration run, in the units of the input file.
    #[arg(long, default_value_t = benchmark_validator::Threshold::DEFAULT)]
    pub threshold: benchmark_validator::Threshold,

    /// Suppresses the per-run progress output.
    #[arg(short, long)]
    pub quiet: bool,
}
