//! BatchMatcher - exhaustive best-match search
//!
//! For every query, every candidate is scored in input order and the first
//! candidate with the strictly highest score wins. Results always line up
//! with the query order, whether the batch runs sequentially or on the
//! worker pool.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::{Backend, DistanceBackend, WagnerFischer};
use crate::error::Result;
use crate::score::score_with;

#[cfg(feature = "parallel")]
use crate::pool::WorkerPool;

/// Score reported when there is nothing to match against
pub const NO_MATCH_SCORE: f64 = -1.0;

/// Best candidate for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub choice: String,
    pub score: f64,
    /// Position of `choice` in the candidate list, `None` for the sentinel
    pub index: Option<usize>,
}

impl Match {
    fn new(choice: &str, score: f64, index: usize) -> Self {
        Self {
            choice: choice.to_string(),
            score,
            index: Some(index),
        }
    }

    /// Sentinel returned for an empty candidate list: `("", -1.0)`
    pub fn none() -> Self {
        Self {
            choice: String::new(),
            score: NO_MATCH_SCORE,
            index: None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.index.is_none()
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::none()
    }
}

/// Matcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Distance backend, resolved once at construction
    pub backend: Backend,
    /// Worker count: 0 = available parallelism, 1 = sequential
    pub workers: usize,
    /// Minimum number of queries before the pool is used
    pub parallel_threshold: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            workers: 1,
            parallel_threshold: 2,
        }
    }
}

impl MatcherConfig {
    /// Pool-backed configuration using every available core
    pub fn parallel() -> Self {
        Self {
            workers: 0,
            ..Self::default()
        }
    }

    /// Worker count after resolving 0 to the available parallelism
    pub fn resolved_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

/// Best-match search with an injected distance backend.
///
/// On native with `parallel` feature, batches fan out one task per query
/// onto a fixed-size worker pool. Otherwise every batch runs sequentially.
#[derive(Debug)]
pub struct BatchMatcher {
    backend: Box<dyn DistanceBackend>,
    backend_name: &'static str,
    #[cfg(feature = "parallel")]
    pool: Option<WorkerPool>,
    #[cfg(feature = "parallel")]
    parallel_threshold: usize,
}

impl Default for BatchMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchMatcher {
    /// Sequential matcher with the pure Wagner-Fischer backend
    pub fn new() -> Self {
        Self::with_backend(Box::new(WagnerFischer))
    }

    /// Sequential matcher with a caller-supplied backend
    pub fn with_backend(backend: Box<dyn DistanceBackend>) -> Self {
        Self {
            backend,
            backend_name: "custom",
            #[cfg(feature = "parallel")]
            pool: None,
            #[cfg(feature = "parallel")]
            parallel_threshold: MatcherConfig::default().parallel_threshold,
        }
    }

    /// Build from configuration. Fails if the backend or the requested
    /// worker count is not available in this build.
    pub fn with_config(config: MatcherConfig) -> Result<Self> {
        let backend = config.backend.build()?;
        let workers = config.resolved_workers();

        #[cfg(feature = "parallel")]
        let pool = if workers > 1 {
            Some(WorkerPool::new(workers)?)
        } else {
            None
        };

        #[cfg(not(feature = "parallel"))]
        {
            if workers > 1 {
                return Err(crate::error::Error::ParallelUnavailable(workers));
            }
        }

        debug!(
            backend = config.backend.as_str(),
            workers,
            parallel_threshold = config.parallel_threshold,
            "Built batch matcher"
        );

        Ok(Self {
            backend,
            backend_name: config.backend.as_str(),
            #[cfg(feature = "parallel")]
            pool,
            #[cfg(feature = "parallel")]
            parallel_threshold: config.parallel_threshold,
        })
    }

    /// Name of the configured backend ("custom" when injected directly)
    pub fn backend_name(&self) -> &'static str {
        self.backend_name
    }

    /// Number of workers used for large batches (1 when sequential)
    pub fn workers(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            if let Some(pool) = &self.pool {
                return pool.workers();
            }
        }
        1
    }

    /// Best candidate for a single query
    pub fn best_match<C: AsRef<str>>(&self, query: &str, choices: &[C]) -> Match {
        if choices.is_empty() {
            return Match::none();
        }

        let mut best_idx = None;
        let mut best_score = NO_MATCH_SCORE;

        for (idx, choice) in choices.iter().enumerate() {
            let s = score_with(self.backend.as_ref(), query, choice.as_ref());
            // Strict: the first candidate reaching the maximum keeps it
            if s > best_score {
                best_idx = Some(idx);
                best_score = s;
            }
        }

        match best_idx {
            Some(idx) => Match::new(choices[idx].as_ref(), best_score, idx),
            None => Match::none(),
        }
    }

    /// Best candidate for every query, in query order
    pub fn best_matches<Q, C>(&self, queries: &[Q], choices: &[C]) -> Vec<Match>
    where
        Q: AsRef<str> + Sync,
        C: AsRef<str> + Sync,
    {
        if choices.is_empty() {
            debug!(queries = queries.len(), "No candidates, returning sentinels");
            return vec![Match::none(); queries.len()];
        }

        #[cfg(feature = "parallel")]
        {
            let pool = self
                .pool
                .as_ref()
                .filter(|_| queries.len() >= self.parallel_threshold);
            if let Some(pool) = pool {
                debug!(
                    queries = queries.len(),
                    choices = choices.len(),
                    workers = pool.workers(),
                    "Matching on worker pool"
                );
                return pool.run_indexed(queries.len(), |idx| {
                    self.best_match(queries[idx].as_ref(), choices)
                });
            }
        }

        debug!(
            queries = queries.len(),
            choices = choices.len(),
            "Matching sequentially"
        );
        queries
            .iter()
            .map(|q| self.best_match(q.as_ref(), choices))
            .collect()
    }
}

/// Best candidate for every query using the sequential default matcher
pub fn best_matches<Q, C>(queries: &[Q], choices: &[C]) -> Vec<Match>
where
    Q: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    BatchMatcher::new().best_matches(queries, choices)
}
