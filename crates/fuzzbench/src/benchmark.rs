//! Reference vs optimized benchmark run

use std::time::Instant;

use fuzzbench_core::{best_matches, BatchMatcher, Match};
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::memory;
use crate::report::PerfReport;

/// Largest score difference still treated as equal
pub const SCORE_TOLERANCE: f64 = 1e-6;

/// Generate the dataset, time both matchers, check they agree, and report.
pub fn run(config: &BenchConfig) -> Result<PerfReport> {
    config.validate()?;

    let spec = &config.dataset;
    let dataset = Dataset::generate(spec)?;
    info!(
        seed = spec.seed,
        queries = dataset.queries.len(),
        choices = dataset.choices.len(),
        length = spec.length,
        "Generated dataset"
    );

    let start = Instant::now();
    let baseline = best_matches(&dataset.queries, &dataset.choices);
    let baseline_time_s = start.elapsed().as_secs_f64();
    let baseline_rss_mb = memory::rss_mb();
    info!(elapsed_s = baseline_time_s, "Baseline finished");

    let matcher = BatchMatcher::with_config(config.matcher.clone())?;
    debug!(
        backend = matcher.backend_name(),
        workers = matcher.workers(),
        "Optimized matcher ready"
    );

    let start = Instant::now();
    let optimized = matcher.best_matches(&dataset.queries, &dataset.choices);
    let optimized_time_s = start.elapsed().as_secs_f64();
    let optimized_rss_mb = memory::rss_mb();
    info!(elapsed_s = optimized_time_s, "Optimized finished");

    verify(&baseline, &optimized)?;

    let report = PerfReport {
        baseline_time_s,
        optimized_time_s,
        speedup: PerfReport::compute_speedup(baseline_time_s, optimized_time_s),
        baseline_rss_mb,
        optimized_rss_mb,
        backend: matcher.backend_name().to_string(),
        workers: matcher.workers(),
        queries: dataset.queries.len(),
        choices: dataset.choices.len(),
        length: spec.length,
    };

    info!(
        speedup = ?report.speedup,
        backend = %report.backend,
        workers = report.workers,
        "Benchmark complete"
    );

    Ok(report)
}

/// Check that both runs picked the same candidates with equal scores
pub fn verify(baseline: &[Match], optimized: &[Match]) -> Result<()> {
    if baseline.len() != optimized.len() {
        return Err(Error::Inconsistent {
            index: baseline.len().min(optimized.len()),
            baseline: format!("{} matches", baseline.len()),
            optimized: format!("{} matches", optimized.len()),
        });
    }

    let mismatch = baseline.iter().zip(optimized).position(|(b, o)| {
        b.choice != o.choice || (b.score - o.score).abs() >= SCORE_TOLERANCE
    });

    match mismatch {
        Some(index) => Err(Error::Inconsistent {
            index,
            baseline: describe(&baseline[index]),
            optimized: describe(&optimized[index]),
        }),
        None => Ok(()),
    }
}

fn describe(m: &Match) -> String {
    if m.is_none() {
        return "no match".to_string();
    }
    format!("{:?} ({:.6})", m.choice, m.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(choice: &str, score: f64, index: usize) -> Match {
        Match {
            choice: choice.to_string(),
            score,
            index: Some(index),
        }
    }

    #[test]
    fn test_verify_equal() {
        let a = vec![matched("flaws", 80.0, 0), Match::none()];
        assert!(verify(&a, &a.clone()).is_ok());
    }

    #[test]
    fn test_verify_within_tolerance() {
        let a = vec![matched("flaws", 80.0, 0)];
        let b = vec![matched("flaws", 80.0 + 1e-9, 0)];
        assert!(verify(&a, &b).is_ok());
    }

    #[test]
    fn test_verify_choice_mismatch() {
        let a = vec![matched("flaws", 80.0, 0), matched("bitten", 83.3, 1)];
        let b = vec![matched("flaws", 80.0, 0), matched("kitchen", 83.3, 0)];
        match verify(&a, &b) {
            Err(Error::Inconsistent { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_length_mismatch() {
        let a = vec![matched("flaws", 80.0, 0)];
        assert!(matches!(
            verify(&a, &[]),
            Err(Error::Inconsistent { index: 0, .. })
        ));
    }
}
