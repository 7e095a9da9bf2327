//! Performance report and gates

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Outcome of one benchmark run, serialized as the JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerfReport {
    pub baseline_time_s: f64,
    pub optimized_time_s: f64,
    /// `baseline / optimized`; `None` when the optimized run took no measurable time
    pub speedup: Option<f64>,
    pub baseline_rss_mb: Option<f64>,
    pub optimized_rss_mb: Option<f64>,
    pub backend: String,
    pub workers: usize,
    pub queries: usize,
    pub choices: usize,
    pub length: usize,
}

/// Optional limits a report has to satisfy
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub max_optimized_secs: Option<f64>,
    pub min_speedup: Option<f64>,
}

impl PerfReport {
    /// Ratio of baseline to optimized time
    pub fn compute_speedup(baseline_time_s: f64, optimized_time_s: f64) -> Option<f64> {
        (optimized_time_s > 0.0).then(|| baseline_time_s / optimized_time_s)
    }

    /// Write the report as pretty-printed JSON, creating parent directories
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!(path = %path.display(), "Wrote performance report");
        Ok(())
    }

    /// Read a report written by [`PerfReport::write`]
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Fail if the report misses any configured threshold
    pub fn check(&self, thresholds: &Thresholds) -> Result<()> {
        if let Some(limit) = thresholds.max_optimized_secs {
            if self.optimized_time_s > limit {
                return Err(Error::Threshold(format!(
                    "optimized run took {:.3}s, limit is {:.3}s",
                    self.optimized_time_s, limit
                )));
            }
        }

        if let Some(min) = thresholds.min_speedup {
            match self.speedup {
                Some(speedup) if speedup >= min => {}
                Some(speedup) => {
                    return Err(Error::Threshold(format!(
                        "speedup {:.2}x is below the required {:.2}x",
                        speedup, min
                    )));
                }
                None => {
                    return Err(Error::Threshold(format!(
                        "speedup not measurable, required {:.2}x",
                        min
                    )));
                }
            }
        }

        Ok(())
    }
}
