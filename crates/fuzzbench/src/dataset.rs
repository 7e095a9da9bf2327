//! Seeded synthetic datasets
//!
//! Choices are random lowercase words; every query is a copy of a random
//! choice with roughly a tenth of its positions overwritten, so each query
//! has at least one close candidate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Letters used for every generated string
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Shape and seed of a synthetic dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub seed: u64,
    pub n_choices: usize,
    pub n_queries: usize,
    /// Length of every string, in chars
    pub length: usize,
}

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            seed: 1337,
            n_choices: 1200,
            n_queries: 60,
            length: 40,
        }
    }
}

impl DatasetSpec {
    /// Positions overwritten per query: `max(1, length / 10)`, none for empty strings
    pub fn mutations(&self) -> usize {
        if self.length == 0 {
            0
        } else {
            (self.length / 10).max(1)
        }
    }
}

/// Queries and candidates for one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub queries: Vec<String>,
    pub choices: Vec<String>,
}

impl Dataset {
    /// Generate a dataset; the same spec always yields the same strings
    pub fn generate(spec: &DatasetSpec) -> Result<Self> {
        if spec.n_queries > 0 && spec.n_choices == 0 {
            return Err(Error::Config(
                "cannot derive queries from an empty choice list".to_string(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(spec.seed);

        let choices: Vec<String> = (0..spec.n_choices)
            .map(|_| (0..spec.length).map(|_| random_letter(&mut rng)).collect())
            .collect();

        let mutations = spec.mutations();
        let queries: Vec<String> = (0..spec.n_queries)
            .map(|_| {
                let base = &choices[rng.gen_range(0..choices.len())];
                let mut chars: Vec<char> = base.chars().collect();
                for _ in 0..mutations {
                    let pos = rng.gen_range(0..spec.length);
                    chars[pos] = random_letter(&mut rng);
                }
                chars.into_iter().collect()
            })
            .collect();

        Ok(Self { queries, choices })
    }
}

fn random_letter(rng: &mut StdRng) -> char {
    ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
}
