// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The selection being built by a selector.
//!
//! A Selection records which k-groups were picked (in pick order) and, for
//! every j-group, how many picked k-groups cover it. It is complete once
//! every j-group's count has reached the coverage threshold.

use crate::combinatorics::ElementSet;
use crate::coverage::{CoverageIndex, JGroupId, KGroupId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    picks: Vec<KGroupId>,
    groups: Vec<ElementSet>,
    satisfied: Vec<usize>,
    coverage: usize,
}

impl Selection {
    /// An empty selection over `num_j_groups` j-groups.
    pub fn new(num_j_groups: usize, coverage: usize) -> Self {
        Self {
            picks: Vec::new(),
            groups: Vec::new(),
            satisfied: vec![0; num_j_groups],
            coverage,
        }
    }

    /// A selection of the given k-groups, with counts taken from `index`.
    pub fn from_picks(index: &CoverageIndex, coverage: usize, picks: &[KGroupId]) -> Self {
        let mut selection = Self::new(index.num_j_groups(), coverage);
        for &pick in picks {
            selection.add(index, pick);
        }
        selection
    }

    /// Add k-group `pick` and bump the count of every j-group it covers.
    ///
    /// Returns the j-groups whose count reached the threshold with this pick.
    pub(crate) fn add(&mut self, index: &CoverageIndex, pick: KGroupId) -> Vec<JGroupId> {
        debug_assert!(!self.picks.contains(&pick), "k-group {} picked twice", pick);
        self.picks.push(pick);
        self.groups.push(index.k_group(pick));

        let mut reached = Vec::new();
        for &j_id in index.covers(pick) {
            self.satisfied[j_id] += 1;
            if self.satisfied[j_id] == self.coverage {
                reached.push(j_id);
            }
        }
        reached
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn coverage(&self) -> usize {
        self.coverage
    }

    /// Picked k-group ids, in pick order.
    pub fn picks(&self) -> &[KGroupId] {
        &self.picks
    }

    /// Element sets of the picked k-groups, in pick order.
    pub fn groups(&self) -> &[ElementSet] {
        &self.groups
    }

    pub fn satisfied_count(&self, j_id: JGroupId) -> usize {
        self.satisfied[j_id]
    }

    pub fn is_satisfied(&self, j_id: JGroupId) -> bool {
        self.satisfied[j_id] >= self.coverage
    }

    /// J-groups still below the coverage threshold, ascending.
    pub fn unsatisfied(&self) -> impl Iterator<Item = JGroupId> + '_ {
        (0..self.satisfied.len()).filter(|&j| !self.is_satisfied(j))
    }

    pub fn unsatisfied_count(&self) -> usize {
        self.unsatisfied().count()
    }

    /// Total coverage still missing: sum of `coverage - count` over j-groups
    /// below the threshold.
    pub fn deficit(&self) -> u128 {
        self.satisfied
            .iter()
            .map(|&count| self.coverage.saturating_sub(count) as u128)
            .sum()
    }

    pub fn is_complete(&self) -> bool {
        self.satisfied.iter().all(|&count| count >= self.coverage)
    }
}
