//! fuzzbench Core Engine
//!
//! Levenshtein edit distance, normalized similarity scoring, and exhaustive
//! best-match search over a candidate list.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations (SIMD, parallel)
//! - `simd` - SIMD-accelerated edit distance via triple_accel
//! - `parallel` - Fixed-size worker pool via rayon for batch matching
//!
//! # Example
//!
//! ```rust
//! use fuzzbench_core::{best_matches, distance, score};
//!
//! assert_eq!(distance("kitten", "sitting"), 3);
//! assert_eq!(score("", ""), 100.0);
//!
//! let matches = best_matches(&["flaw"], &["flaws", "law"]);
//! assert_eq!(matches[0].choice, "flaws");
//! assert_eq!(matches[0].score, 80.0);
//! ```

pub mod distance;
pub mod error;
pub mod matcher;
#[cfg(feature = "parallel")]
pub mod pool;
pub mod score;

// Re-export main types at crate root
pub use distance::{distance, Backend, DistanceBackend, Strsim, WagnerFischer};
#[cfg(feature = "simd")]
pub use distance::Simd;
pub use error::{Error, Result};
pub use matcher::{best_matches, BatchMatcher, Match, MatcherConfig};
#[cfg(feature = "parallel")]
pub use pool::WorkerPool;
pub use score::{score, score_with};
