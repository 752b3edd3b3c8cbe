// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection context combining the run's inputs and its derived data.
//!
//! The SelectionContext holds:
//! - the Universe and validated Parameters (never mutated)
//! - the CoverageIndex built from the enumerated k-groups and j-groups
//!   (read-only once built)
//! - run Statistics (updated by the selectors)
//!
//! A context lives for one selection run. Nothing is shared between
//! contexts, so independent runs may proceed on different threads.
//!
//! # Example
//!
//! ```
//! use covering_design::context::SelectionContext;
//! use covering_design::problem::{Parameters, Universe};
//!
//! let universe = Universe::lettered(7).unwrap();
//! let params = Parameters::for_universe_size(7, 4, 4, 3, 1);
//! let ctx = SelectionContext::new(universe, params).unwrap();
//! assert_eq!(ctx.index().num_j_groups(), 35);
//! ```

use crate::combinatorics::ElementSet;
use crate::coverage::{enumerate_groups, CoverageIndex, JGroupId};
use crate::error::ParameterError;
use crate::problem::{Parameters, Universe};
use crate::state::{Counters, Statistics};

#[derive(Debug, Clone)]
pub struct SelectionContext {
    universe: Universe,
    params: Parameters,
    index: CoverageIndex,
    /// Counters for this run.
    pub statistics: Statistics,
}

impl SelectionContext {
    /// Validate the parameters and build the full coverage relation.
    pub fn new(universe: Universe, params: Parameters) -> Result<Self, ParameterError> {
        Self::restricted(universe, params, |_| true)
    }

    /// Like [`SelectionContext::new`], but only k-groups accepted by
    /// `candidate` may be selected. J-groups are always the full enumeration.
    pub fn restricted<F>(universe: Universe, params: Parameters, candidate: F) -> Result<Self, ParameterError>
    where
        F: Fn(ElementSet) -> bool,
    {
        params.validate_for(universe.len())?;

        let k_groups: Vec<ElementSet> = enumerate_groups(params.n, params.k)
            .into_iter()
            .filter(|&group| candidate(group))
            .collect();
        let j_groups = enumerate_groups(params.n, params.j);
        let index = CoverageIndex::build(k_groups, j_groups, params.s);

        let mut statistics = Statistics::new();
        statistics.set(Counters::KGroups, index.num_k_groups() as u64);
        statistics.set(Counters::JGroups, index.num_j_groups() as u64);
        statistics.set(
            Counters::SSubgroups,
            u64::try_from(index.num_s_subgroups()).unwrap_or(u64::MAX),
        );
        statistics.set(Counters::CoveragePairs, index.coverage_pairs() as u64);

        Ok(Self {
            universe,
            params,
            index,
            statistics,
        })
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn index(&self) -> &CoverageIndex {
        &self.index
    }

    /// Labels of j-group `id`, in universe order.
    pub fn j_group_labels(&self, id: JGroupId) -> Vec<String> {
        self.universe.labels_of(self.index.j_group(id))
    }
}
