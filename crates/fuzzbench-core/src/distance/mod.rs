//! Distance Engine
//!
//! Levenshtein edit distance behind a single strategy interface:
//!
//! - **WagnerFischer**: pure Rust dynamic program, always available (default)
//! - **Strsim**: `strsim::levenshtein`
//! - **Simd**: `triple_accel` for ASCII input - native only
//!
//! Every backend operates on Unicode scalar values and returns the same
//! distance for the same pair of strings. The backend is picked once when a
//! matcher is built; nothing is re-selected per call.
//!
//! # Example
//!
//! ```rust
//! use fuzzbench_core::distance::{distance, Backend};
//!
//! assert_eq!(distance("flaw", "lawn"), 2);
//!
//! let backend = Backend::Strsim.build().unwrap();
//! assert_eq!(backend.compute_distance("flaw", "lawn"), 2);
//! ```

mod backends;
mod engine;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[cfg(feature = "simd")]
pub use backends::Simd;
pub use backends::Strsim;
pub use engine::{distance, WagnerFischer};

/// Computes the Levenshtein distance between two strings.
pub trait DistanceBackend: Send + Sync + fmt::Debug {
    fn compute_distance(&self, a: &str, b: &str) -> usize;
}

/// Named backend selection, resolved once at construction time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    #[default]
    WagnerFischer,
    Strsim,
    Simd,
}

impl Backend {
    /// All backend names, including ones not compiled into this build
    pub const ALL: [Backend; 3] = [Backend::WagnerFischer, Backend::Strsim, Backend::Simd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::WagnerFischer => "wagner_fischer",
            Backend::Strsim => "strsim",
            Backend::Simd => "simd",
        }
    }

    /// Whether this backend is compiled into the current build
    pub fn is_available(&self) -> bool {
        match self {
            Backend::WagnerFischer | Backend::Strsim => true,
            Backend::Simd => cfg!(feature = "simd"),
        }
    }

    /// Instantiate the backend
    pub fn build(self) -> Result<Box<dyn DistanceBackend>> {
        match self {
            Backend::WagnerFischer => Ok(Box::new(WagnerFischer)),
            Backend::Strsim => Ok(Box::new(Strsim)),
            #[cfg(feature = "simd")]
            Backend::Simd => Ok(Box::new(Simd)),
            #[cfg(not(feature = "simd"))]
            Backend::Simd => Err(Error::BackendUnavailable {
                backend: self.as_str(),
                feature: "simd",
            }),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        Backend::ALL
            .into_iter()
            .find(|b| b.as_str() == name)
            .ok_or_else(|| Error::UnknownBackend(s.to_string()))
    }
}
