//! Matcher construction errors
//!
//! Distance, scoring and matching never fail; only building a matcher from
//! configuration can.

use thiserror::Error;

/// Errors raised while resolving a backend or building a matcher
#[derive(Debug, Error)]
pub enum Error {
    /// Backend name not recognised
    #[error("unknown distance backend: {0}")]
    UnknownBackend(String),

    /// Backend exists but is not compiled into this build
    #[error("distance backend '{backend}' requires the `{feature}` feature")]
    BackendUnavailable {
        backend: &'static str,
        feature: &'static str,
    },

    /// More than one worker requested in a build without a worker pool
    #[error("{0} workers requested but the `parallel` feature is disabled")]
    ParallelUnavailable(usize),

    /// Worker pool could not be started
    #[cfg(feature = "parallel")]
    #[error("worker pool error: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias using the core Error.
pub type Result<T> = std::result::Result<T, Error>;
