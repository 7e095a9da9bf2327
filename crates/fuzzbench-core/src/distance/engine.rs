//! Wagner-Fischer dynamic program over Unicode scalar values

use std::mem;

use super::DistanceBackend;

/// Pure Rust Levenshtein backend, always available
#[derive(Debug, Clone, Copy, Default)]
pub struct WagnerFischer;

impl DistanceBackend for WagnerFischer {
    #[inline]
    fn compute_distance(&self, a: &str, b: &str) -> usize {
        distance(a, b)
    }
}

/// Levenshtein distance between `a` and `b`, counted in chars.
///
/// Total over all finite strings: `distance(a, "") == len(a)`,
/// `distance(a, a) == 0`.
pub fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    // A shared prefix or suffix never changes the distance
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

    // Roll over the shorter string: O(min(len(a), len(b))) space
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, long_char) in long.iter().enumerate() {
        curr[0] = i + 1;

        for (j, short_char) in short.iter().enumerate() {
            let cost = usize::from(long_char != short_char);
            curr[j + 1] = (curr[j] + 1).min(prev[j + 1] + 1).min(prev[j] + cost);
        }

        mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
