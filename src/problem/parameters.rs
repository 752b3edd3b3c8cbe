// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run parameters `(m, n, k, j, s, coverage)` and their validation.

use crate::combinatorics::MAX_ELEMENTS;
use crate::error::ParameterError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of one covering-design run.
///
/// `m` only bounds the label alphabet when the universe is drawn at random;
/// the engine itself reads `n`, `k`, `j`, `s` and `coverage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameters {
    pub m: usize,
    pub n: usize,
    pub k: usize,
    pub j: usize,
    pub s: usize,
    pub coverage: usize,
}

impl Parameters {
    pub fn new(m: usize, n: usize, k: usize, j: usize, s: usize, coverage: usize) -> Self {
        Self { m, n, k, j, s, coverage }
    }

    /// Parameters for a universe not drawn from a larger alphabet (`m = n`).
    pub fn for_universe_size(n: usize, k: usize, j: usize, s: usize, coverage: usize) -> Self {
        Self::new(n, n, k, j, s, coverage)
    }

    /// Check `1 <= s <= j <= k <= n <= 64` and `coverage >= 1`.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let Self { n, k, j, s, coverage, .. } = *self;
        if !(s <= j && j <= k && k <= n) {
            return Err(ParameterError::Ordering { n, k, j, s });
        }
        if s == 0 {
            return Err(ParameterError::EmptySubgroup);
        }
        if coverage == 0 {
            return Err(ParameterError::Coverage);
        }
        if n > MAX_ELEMENTS {
            return Err(ParameterError::UniverseTooLarge { n, max: MAX_ELEMENTS });
        }
        Ok(())
    }

    /// Validate against a concrete universe size as well.
    pub fn validate_for(&self, universe_len: usize) -> Result<(), ParameterError> {
        if universe_len != self.n {
            return Err(ParameterError::UniverseSizeMismatch {
                expected: self.n,
                actual: universe_len,
            });
        }
        self.validate()
    }

    /// The `m-n-k-j-s-coverage` prefix used in record names.
    pub fn name_prefix(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}-{}",
            self.m, self.n, self.k, self.j, self.s, self.coverage
        )
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m={}, n={}, k={}, j={}, s={}, coverage={}",
            self.m, self.n, self.k, self.j, self.s, self.coverage
        )
    }
}
