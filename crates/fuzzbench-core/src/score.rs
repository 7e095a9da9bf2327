//! Normalized similarity on a 0-100 scale

use crate::distance::{DistanceBackend, WagnerFischer};

/// Score of two empty strings; the general formula would divide by zero.
pub const EMPTY_PAIR_SCORE: f64 = 100.0;

/// Similarity of `a` and `b` in `[0.0, 100.0]` using the default backend.
///
/// `(1 - distance / max(len(a), len(b))) * 100`, lengths in chars.
#[inline]
pub fn score(a: &str, b: &str) -> f64 {
    score_with(&WagnerFischer, a, b)
}

/// Same as [`score`] with an explicit distance backend
pub fn score_with(backend: &dyn DistanceBackend, a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return EMPTY_PAIR_SCORE;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let dist = backend.compute_distance(a, b);
    (1.0 - dist as f64 / max_len as f64) * 100.0
}
