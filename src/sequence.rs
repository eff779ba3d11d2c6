// In: src/sequence.rs

//! The in-memory sequence store and its random population logic.
//!
//! A `Sequence` is materialized once per verification session and is strictly
//! read-only afterwards: every aggregation pass, linear or parallel, observes
//! the same elements. Generation draws uniformly from the configured inclusive
//! value range, seeded either from configuration (reproducible sessions) or
//! from OS entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::HarnessConfig;
use crate::error::ParfoldError;
use crate::traits::AggElement;

/// A fixed-length, read-only sequence of signed integer elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    elems: Vec<T>,
}

impl<T: AggElement> Sequence<T> {
    /// Wraps an existing vector. Intended for tests and for callers that
    /// bring their own data instead of random generation.
    pub fn from_vec(elems: Vec<T>) -> Self {
        Self { elems }
    }

    /// Populates a sequence of `config.length` elements drawn uniformly from
    /// `config.value_range`.
    ///
    /// The range must already fit the element width; a draw that cannot be
    /// narrowed into `T` is a configuration error, never a silent truncation.
    pub fn generate(config: &HarnessConfig) -> Result<Self, ParfoldError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (lower, upper) = (config.value_range.lower, config.value_range.upper);
        if lower > upper {
            return Err(ParfoldError::ConfigError(format!(
                "value range lower bound {} exceeds upper bound {}",
                lower, upper
            )));
        }

        let mut elems = Vec::with_capacity(config.length);
        for _ in 0..config.length {
            let raw: i64 = rng.random_range(lower..=upper);
            let elem = T::from(raw).ok_or_else(|| {
                ParfoldError::ConfigError(format!(
                    "generated value {} does not fit the configured element width",
                    raw
                ))
            })?;
            elems.push(elem);
        }
        Ok(Self { elems })
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// The full element slice, the input of every aggregation pass.
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }
}
