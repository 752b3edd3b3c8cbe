// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The coverage relation between k-groups and j-groups.
//!
//! A k-group K covers a j-group J when at least one size-`s` subgroup of J
//! is a subset of K. Both directions of the relation are kept:
//!
//! - `covers[k]`: j-groups covered by k-group `k` (greedy scoring and updates)
//! - `covered_by[j]`: k-groups covering j-group `j` (greedy score decrements,
//!   one ILP constraint per j-group)
//!
//! Both lists are in ascending index order, which is the enumeration order
//! of the groups themselves.
//!
//! # Containment test
//!
//! Some s-subset of J lies inside K exactly when `|J ∩ K| >= s`, so the
//! per-pair short-circuit over J's s-subgroups reduces to one popcount.
//! [`covers_by_enumeration`] performs the explicit subgroup walk and is used
//! to cross-check the fast path.

use crate::combinatorics::{choose, Combinations, ElementSet};
use log::info;

/// Index of a k-group in enumeration order.
pub type KGroupId = usize;

/// Index of a j-group in enumeration order.
pub type JGroupId = usize;

/// All size-`r` subsets of the positions `0..n`, in lexicographic order.
pub fn enumerate_groups(n: usize, r: usize) -> Vec<ElementSet> {
    Combinations::new(n, r)
        .map(|combo| ElementSet::from_positions(&combo))
        .collect()
}

/// Does `k_group` contain at least one `s`-subgroup of `j_group`?
#[inline]
pub fn covers(k_group: ElementSet, j_group: ElementSet, s: usize) -> bool {
    k_group.intersection_len(j_group) >= s
}

/// Same relation as [`covers`], by walking the s-subgroups of `j_group` and
/// stopping at the first one contained in `k_group`.
pub fn covers_by_enumeration(k_group: ElementSet, j_group: ElementSet, s: usize) -> bool {
    j_group.subsets(s).any(|sub| sub.is_subset(k_group))
}

/// Immutable k-group / j-group incidence for one run.
#[derive(Debug, Clone)]
pub struct CoverageIndex {
    s: usize,
    k_groups: Vec<ElementSet>,
    j_groups: Vec<ElementSet>,
    covers: Vec<Vec<JGroupId>>,
    covered_by: Vec<Vec<KGroupId>>,
}

impl CoverageIndex {
    /// Build the relation for the given candidate k-groups and j-groups.
    pub fn build(k_groups: Vec<ElementSet>, j_groups: Vec<ElementSet>, s: usize) -> Self {
        info!(
            "[CoverageIndex] Building relation: {} k-groups x {} j-groups (s={})",
            k_groups.len(),
            j_groups.len(),
            s
        );

        let mut covers_lists: Vec<Vec<JGroupId>> = vec![Vec::new(); k_groups.len()];
        let mut covered_by = Vec::with_capacity(j_groups.len());

        for (j_id, &j_group) in j_groups.iter().enumerate() {
            let mut covering = Vec::new();
            for (k_id, &k_group) in k_groups.iter().enumerate() {
                if covers(k_group, j_group, s) {
                    covering.push(k_id);
                    covers_lists[k_id].push(j_id);
                }
            }
            covered_by.push(covering);
        }

        let index = Self {
            s,
            k_groups,
            j_groups,
            covers: covers_lists,
            covered_by,
        };

        info!(
            "[CoverageIndex] Complete ({} coverage pairs, {} uncovered j-groups)",
            index.coverage_pairs(),
            index.uncovered_j_groups().count()
        );
        index
    }

    /// Build the full relation: every size-`k` and size-`j` subset of `0..n`.
    pub fn for_universe(n: usize, k: usize, j: usize, s: usize) -> Self {
        Self::build(enumerate_groups(n, k), enumerate_groups(n, j), s)
    }

    pub fn s(&self) -> usize {
        self.s
    }

    pub fn num_k_groups(&self) -> usize {
        self.k_groups.len()
    }

    pub fn num_j_groups(&self) -> usize {
        self.j_groups.len()
    }

    pub fn k_groups(&self) -> &[ElementSet] {
        &self.k_groups
    }

    pub fn j_groups(&self) -> &[ElementSet] {
        &self.j_groups
    }

    pub fn k_group(&self, id: KGroupId) -> ElementSet {
        self.k_groups[id]
    }

    pub fn j_group(&self, id: JGroupId) -> ElementSet {
        self.j_groups[id]
    }

    /// J-groups covered by k-group `id`, ascending.
    pub fn covers(&self, id: KGroupId) -> &[JGroupId] {
        &self.covers[id]
    }

    /// K-groups covering j-group `id`, ascending.
    pub fn covered_by(&self, id: JGroupId) -> &[KGroupId] {
        &self.covered_by[id]
    }

    /// The s-subgroups of j-group `id`, in lexicographic order.
    pub fn s_subgroups(&self, id: JGroupId) -> impl Iterator<Item = ElementSet> {
        self.j_groups[id].subsets(self.s)
    }

    /// Number of s-subgroups derived across all j-groups.
    pub fn num_s_subgroups(&self) -> u128 {
        self.j_groups.len() as u128 * choose(self.j_groups.first().map_or(0, |g| g.len()), self.s)
    }

    /// Total number of (k-group, j-group) pairs in the relation.
    pub fn coverage_pairs(&self) -> usize {
        self.covered_by.iter().map(Vec::len).sum()
    }

    /// J-groups that no candidate k-group covers.
    pub fn uncovered_j_groups(&self) -> impl Iterator<Item = JGroupId> + '_ {
        self.covered_by
            .iter()
            .enumerate()
            .filter(|(_, covering)| covering.is_empty())
            .map(|(id, _)| id)
    }
}
