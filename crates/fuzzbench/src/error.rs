//! Harness error types.

use thiserror::Error;

/// Error type for benchmark runs.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Matcher construction error
    #[error("matcher error: {0}")]
    Core(#[from] fuzzbench_core::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Performance gate not met
    #[error("threshold not met: {0}")]
    Threshold(String),

    /// Optimized matcher disagreed with the reference
    #[error("result mismatch at query {index}: baseline {baseline}, optimized {optimized}")]
    Inconsistent {
        index: usize,
        baseline: String,
        optimized: String,
    },
}

/// Result type alias using the harness Error.
pub type Result<T> = std::result::Result<T, Error>;
