//! fuzzbench
//!
//! Times the sequential reference matcher against a configured batch
//! matcher on a seeded synthetic dataset and writes a JSON report.
//!
//! ## Usage
//!
//! ```bash
//! fuzzbench --backend simd --workers 8 --min-speedup 4
//! ```
//!
//! ## Configuration
//!
//! Every flag has an environment fallback (`FUZZBENCH_SEED`,
//! `FUZZBENCH_BACKEND`, ...). `RUST_LOG` overrides `--log-level`.

use std::path::PathBuf;

use clap::Parser;
use fuzzbench::config::{DEFAULT_OUTPUT, DEFAULT_WORKERS};
use fuzzbench::{benchmark, BenchConfig, DatasetSpec, Thresholds};
use fuzzbench_core::{Backend, MatcherConfig};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "fuzzbench")]
#[command(about = "Fuzzy best-match benchmark: reference vs optimized matcher")]
#[command(version)]
struct Args {
    /// Dataset RNG seed
    #[arg(long, env = "FUZZBENCH_SEED", default_value_t = 1337)]
    seed: u64,

    /// Number of candidate strings
    #[arg(long, env = "FUZZBENCH_CHOICES", default_value_t = 1200)]
    choices: usize,

    /// Number of query strings
    #[arg(long, env = "FUZZBENCH_QUERIES", default_value_t = 60)]
    queries: usize,

    /// Length of every generated string
    #[arg(long, env = "FUZZBENCH_LENGTH", default_value_t = 40)]
    length: usize,

    /// Report output path
    #[arg(short, long, env = "FUZZBENCH_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Distance backend for the optimized run (wagner_fischer, strsim, simd)
    #[arg(short, long, env = "FUZZBENCH_BACKEND", default_value = "wagner_fischer")]
    backend: Backend,

    /// Worker threads for the optimized run (0 = all cores, 1 = sequential)
    #[arg(short, long, env = "FUZZBENCH_WORKERS", default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Fail unless baseline / optimized time reaches this ratio
    #[arg(long, env = "FUZZBENCH_MIN_SPEEDUP")]
    min_speedup: Option<f64>,

    /// Fail if the optimized run takes longer than this many seconds
    #[arg(long, env = "FUZZBENCH_MAX_OPTIMIZED_SECS")]
    max_optimized_secs: Option<f64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<Args> for BenchConfig {
    fn from(args: Args) -> Self {
        BenchConfig {
            dataset: DatasetSpec {
                seed: args.seed,
                n_choices: args.choices,
                n_queries: args.queries,
                length: args.length,
            },
            matcher: MatcherConfig {
                backend: args.backend,
                workers: args.workers,
                ..MatcherConfig::default()
            },
            output: args.output,
            thresholds: Thresholds {
                max_optimized_secs: args.max_optimized_secs,
                min_speedup: args.min_speedup,
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    fuzzbench::tracing::init_with_filter(&args.log_level);

    info!("Starting fuzzbench");
    info!("  Version: {}", env!("CARGO_PKG_VERSION"));

    let config = BenchConfig::from(args);
    let report = benchmark::run(&config).inspect_err(|e| error!("Benchmark failed: {}", e))?;
    report.write(&config.output)?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    report
        .check(&config.thresholds)
        .inspect_err(|e| error!("{}", e))?;

    Ok(())
}
