//! Third-party distance backends
//!
//! Platform-specific implementations:
//! - Native: SIMD edit distance via triple_accel
//! - Everywhere: strsim

use super::DistanceBackend;

/// `strsim::levenshtein` (counts chars)
#[derive(Debug, Clone, Copy, Default)]
pub struct Strsim;

impl DistanceBackend for Strsim {
    #[inline]
    fn compute_distance(&self, a: &str, b: &str) -> usize {
        strsim::levenshtein(a, b)
    }
}

/// SIMD-accelerated edit distance via triple_accel.
///
/// triple_accel works on bytes, which only equals the char distance when
/// both inputs are ASCII. Anything else goes through the pure engine.
#[cfg(feature = "simd")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Simd;

#[cfg(feature = "simd")]
impl DistanceBackend for Simd {
    #[inline]
    fn compute_distance(&self, a: &str, b: &str) -> usize {
        if a.is_ascii() && b.is_ascii() {
            triple_accel::levenshtein::levenshtein_exp(a.as_bytes(), b.as_bytes()) as usize
        } else {
            super::distance(a, b)
        }
    }
}
