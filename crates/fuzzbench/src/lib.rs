//! fuzzbench harness
//!
//! Measures the sequential reference matcher against a configured
//! [`BatchMatcher`](fuzzbench_core::BatchMatcher) on a seeded synthetic
//! dataset, then writes a JSON performance report.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fuzzbench::{benchmark, BenchConfig};
//!
//! let config = BenchConfig::default();
//! let report = benchmark::run(&config).unwrap();
//! report.write(&config.output).unwrap();
//! println!("speedup: {:?}", report.speedup);
//! ```

pub mod benchmark;
pub mod config;
pub mod dataset;
pub mod error;
pub mod memory;
pub mod report;
pub mod tracing;

// Re-export main types
pub use config::BenchConfig;
pub use dataset::{Dataset, DatasetSpec};
pub use error::{Error, Result};
pub use report::{PerfReport, Thresholds};
