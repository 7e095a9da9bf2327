//! Benchmark configuration

use std::path::PathBuf;

use fuzzbench_core::MatcherConfig;

use crate::dataset::DatasetSpec;
use crate::error::{Error, Result};
use crate::report::Thresholds;

/// Default report location, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "artifacts/perf_report.json";

/// Default worker count: one per core with the pool, otherwise sequential
pub const DEFAULT_WORKERS: usize = if cfg!(feature = "native") { 0 } else { 1 };

/// Everything a benchmark run needs
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Synthetic dataset shape and seed
    pub dataset: DatasetSpec,
    /// Matcher under test
    pub matcher: MatcherConfig,
    /// Report file path
    pub output: PathBuf,
    /// Performance gates checked after the report is written
    pub thresholds: Thresholds,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetSpec::default(),
            matcher: MatcherConfig {
                workers: DEFAULT_WORKERS,
                ..MatcherConfig::default()
            },
            output: PathBuf::from(DEFAULT_OUTPUT),
            thresholds: Thresholds::default(),
        }
    }
}

impl BenchConfig {
    /// Reject configurations that cannot produce a dataset or a matcher
    pub fn validate(&self) -> Result<()> {
        let spec = &self.dataset;
        if spec.n_queries > 0 && spec.n_choices == 0 {
            return Err(Error::Config(format!(
                "{} queries requested but no choices to derive them from",
                spec.n_queries
            )));
        }

        if !self.matcher.backend.is_available() {
            return Err(Error::Config(format!(
                "backend '{}' is not compiled into this build",
                self.matcher.backend
            )));
        }

        let workers = self.matcher.resolved_workers();
        if !cfg!(feature = "native") && workers > 1 {
            return Err(Error::Config(format!(
                "{} workers requested but this build has no worker pool (enable the `native` feature)",
                workers
            )));
        }

        if let Some(limit) = self.thresholds.max_optimized_secs {
            if !(limit.is_finite() && limit > 0.0) {
                return Err(Error::Config(format!(
                    "max optimized time must be positive, got {}",
                    limit
                )));
            }
        }

        if let Some(min) = self.thresholds.min_speedup {
            if !(min.is_finite() && min > 0.0) {
                return Err(Error::Config(format!(
                    "min speedup must be positive, got {}",
                    min
                )));
            }
        }

        if self.output.as_os_str().is_empty() {
            return Err(Error::Config("output path is empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BenchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dataset.seed, 1337);
        assert_eq!(config.dataset.n_choices, 1200);
        assert_eq!(config.dataset.n_queries, 60);
        assert_eq!(config.dataset.length, 40);
        assert_eq!(config.output, PathBuf::from("artifacts/perf_report.json"));
    }

    #[test]
    fn test_queries_without_choices_rejected() {
        let mut config = BenchConfig::default();
        config.dataset.n_choices = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.dataset.n_queries = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_thresholds_rejected() {
        let mut config = BenchConfig::default();
        config.thresholds.min_speedup = Some(0.0);
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = BenchConfig::default();
        config.thresholds.max_optimized_secs = Some(f64::NAN);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_multiple_workers_accepted_with_pool() {
        let mut config = BenchConfig::default();
        config.matcher.workers = 2;
        assert!(config.validate().is_ok());
    }

    #[cfg(not(feature = "native"))]
    #[test]
    fn test_multiple_workers_rejected_without_pool() {
        let mut config = BenchConfig::default();
        assert_eq!(config.matcher.workers, 1);
        assert!(config.validate().is_ok());

        config.matcher.workers = 2;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_output_rejected() {
        let config = BenchConfig {
            output: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
