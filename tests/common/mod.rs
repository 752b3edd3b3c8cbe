// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use covering_design::context::SelectionContext;
use covering_design::coverage::covers;
use covering_design::problem::{Parameters, Universe};
use covering_design::Selection;

/// Context over the lettered universe `A, B, C, ...`.
pub fn lettered_context(n: usize, k: usize, j: usize, s: usize, coverage: usize) -> SelectionContext {
    SelectionContext::new(
        Universe::lettered(n).unwrap(),
        Parameters::for_universe_size(n, k, j, s, coverage),
    )
    .unwrap()
}

/// Check a selection independently of the coverage index: every group has
/// `k` members from the universe, and every j-subset of the universe is
/// covered at least `coverage` times.
pub fn assert_valid_cover(ctx: &SelectionContext, selection: &Selection) {
    let params = ctx.params();
    let all = ctx.universe().all();

    for group in selection.groups() {
        assert_eq!(group.len(), params.k, "group {} has wrong size", group);
        assert!(group.is_subset(all), "group {} leaves the universe", group);
    }

    for j_group in all.subsets(params.j) {
        let count = selection
            .groups()
            .iter()
            .filter(|&&k_group| covers(k_group, j_group, params.s))
            .count();
        assert!(
            count >= params.coverage,
            "j-group {} covered {} times, need {}",
            j_group,
            count,
            params.coverage
        );
    }
}
