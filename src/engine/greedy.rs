// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy multicover selection.
//!
//! # Algorithm
//!
//! Each k-group carries a score: the number of currently unsatisfied
//! j-groups it covers. One step picks the unselected k-group with the highest
//! score (lowest index on ties), adds it to the selection, and bumps the
//! satisfied count of every j-group it covers. When a j-group reaches the
//! coverage threshold it leaves the unsatisfied set, and the score of every
//! k-group covering it drops by one.
//!
//! The run ends `Satisfied` when no j-group is below the threshold, or
//! `Stalled` when j-groups remain but every unselected k-group scores zero.
//!
//! This is a heuristic: the selection need not be of minimum size, but every
//! non-stalled step lowers the total coverage deficit, so the run terminates.

use crate::context::SelectionContext;
use crate::coverage::{CoverageIndex, JGroupId, KGroupId};
use crate::state::{Counters, Selection};
use log::{debug, info, warn};

/// Where a greedy run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreedyState {
    /// Unsatisfied j-groups remain and some candidate can still help.
    Searching,
    /// Every j-group has reached the coverage threshold.
    Satisfied,
    /// Unsatisfied j-groups remain but no unselected k-group covers any of them.
    Stalled,
}

/// A greedy run that stopped short of full coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StalledDiagnostic {
    /// The partial selection made before progress ran out.
    pub selection: Selection,
    /// J-groups still below the coverage threshold, ascending.
    pub unsatisfied: Vec<JGroupId>,
}

/// Terminal result of a greedy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreedyOutcome {
    Satisfied(Selection),
    Stalled(StalledDiagnostic),
}

impl GreedyOutcome {
    pub fn selection(&self) -> &Selection {
        match self {
            GreedyOutcome::Satisfied(selection) => selection,
            GreedyOutcome::Stalled(diagnostic) => &diagnostic.selection,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        matches!(self, GreedyOutcome::Satisfied(_))
    }
}

/// Step-wise greedy selector over one coverage index.
#[derive(Debug)]
pub struct GreedySelector<'a> {
    index: &'a CoverageIndex,
    selection: Selection,
    selected: Vec<bool>,
    scores: Vec<usize>,
    unsatisfied: usize,
    state: GreedyState,
    steps: u64,
}

impl<'a> GreedySelector<'a> {
    pub fn new(index: &'a CoverageIndex, coverage: usize) -> Self {
        let scores = (0..index.num_k_groups())
            .map(|k_id| index.covers(k_id).len())
            .collect();
        let unsatisfied = index.num_j_groups();
        Self {
            index,
            selection: Selection::new(unsatisfied, coverage),
            selected: vec![false; index.num_k_groups()],
            scores,
            unsatisfied,
            state: if unsatisfied == 0 {
                GreedyState::Satisfied
            } else {
                GreedyState::Searching
            },
            steps: 0,
        }
    }

    pub fn state(&self) -> GreedyState {
        self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Number of j-groups still below the coverage threshold.
    pub fn unsatisfied_count(&self) -> usize {
        self.unsatisfied
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Best unselected candidate: highest score, lowest index on ties.
    /// None when no candidate covers an unsatisfied j-group.
    fn best_candidate(&self) -> Option<KGroupId> {
        let mut best: Option<(KGroupId, usize)> = None;
        for (k_id, &score) in self.scores.iter().enumerate() {
            if self.selected[k_id] || score == 0 {
                continue;
            }
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((k_id, score));
            }
        }
        best.map(|(k_id, _)| k_id)
    }

    /// Perform one greedy step and return the resulting state.
    ///
    /// Once the state is terminal, further calls do nothing.
    pub fn step(&mut self) -> GreedyState {
        if self.state != GreedyState::Searching {
            return self.state;
        }

        let Some(pick) = self.best_candidate() else {
            self.state = GreedyState::Stalled;
            return self.state;
        };

        debug!(
            "[Greedy] step {}: k-group {} covers {} unsatisfied j-groups",
            self.steps, pick, self.scores[pick]
        );

        self.selected[pick] = true;
        self.steps += 1;
        for j_id in self.selection.add(self.index, pick) {
            self.unsatisfied -= 1;
            for &k_id in self.index.covered_by(j_id) {
                self.scores[k_id] -= 1;
            }
        }

        if self.unsatisfied == 0 {
            self.state = GreedyState::Satisfied;
        }
        self.state
    }

    /// Step until the run is `Satisfied` or `Stalled`.
    pub fn run(self) -> GreedyOutcome {
        self.run_counted().0
    }

    /// Like [`GreedySelector::run`], also returning the number of steps taken.
    pub fn run_counted(mut self) -> (GreedyOutcome, u64) {
        while self.step() == GreedyState::Searching {}
        let steps = self.steps;
        (self.finish(), steps)
    }

    fn finish(self) -> GreedyOutcome {
        match self.state {
            GreedyState::Satisfied => {
                info!("[Greedy] Satisfied with {} k-groups", self.selection.len());
                GreedyOutcome::Satisfied(self.selection)
            }
            _ => {
                let unsatisfied: Vec<JGroupId> = self.selection.unsatisfied().collect();
                warn!(
                    "[Greedy] Stalled after {} k-groups with {} j-groups below coverage",
                    self.selection.len(),
                    unsatisfied.len()
                );
                GreedyOutcome::Stalled(StalledDiagnostic {
                    selection: self.selection,
                    unsatisfied,
                })
            }
        }
    }
}

/// Run the greedy selector to completion over a prepared context.
pub fn run(ctx: &mut SelectionContext) -> GreedyOutcome {
    let (outcome, steps) = GreedySelector::new(ctx.index(), ctx.params().coverage).run_counted();
    ctx.statistics.add(Counters::GreedySteps, steps);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_instance_selects_everything() {
        // k = j = s: each j-group is covered only by itself
        let index = CoverageIndex::for_universe(5, 3, 3, 3);
        let outcome = GreedySelector::new(&index, 1).run();
        assert!(outcome.is_satisfied());
        assert_eq!(outcome.selection().len(), 10);
    }

    #[test]
    fn test_tie_break_lowest_index() {
        let index = CoverageIndex::for_universe(5, 3, 3, 3);
        let mut selector = GreedySelector::new(&index, 1);
        selector.step();
        selector.step();
        assert_eq!(selector.selection().picks(), &[0, 1]);
    }

    #[test]
    fn test_one_group_covers_all() {
        // k = n: the single k-group covers everything
        let index = CoverageIndex::for_universe(6, 6, 4, 2);
        let mut selector = GreedySelector::new(&index, 1);
        assert_eq!(selector.step(), GreedyState::Satisfied);
        assert_eq!(selector.unsatisfied_count(), 0);
        assert_eq!(selector.step(), GreedyState::Satisfied);
        assert_eq!(selector.steps(), 1);
    }

    #[test]
    fn test_coverage_beyond_candidates_stalls() {
        // Only one k-group exists, coverage 2 can never be met
        let index = CoverageIndex::for_universe(6, 6, 4, 2);
        match GreedySelector::new(&index, 2).run() {
            GreedyOutcome::Stalled(diagnostic) => {
                assert_eq!(diagnostic.selection.len(), 1);
                assert_eq!(diagnostic.unsatisfied.len(), 15);
            }
            other => panic!("expected stall, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_coverage_stalls() {
        // Every j-group has a single candidate, far below the threshold
        let index = CoverageIndex::for_universe(5, 3, 3, 3);
        match GreedySelector::new(&index, (1 << 32) + 1).run() {
            GreedyOutcome::Stalled(diagnostic) => {
                assert_eq!(diagnostic.selection.len(), 10);
                assert_eq!(diagnostic.unsatisfied.len(), 10);
            }
            other => panic!("expected stall, got {:?}", other),
        }
    }

    #[test]
    fn test_run_counted_reports_steps() {
        let index = CoverageIndex::for_universe(5, 3, 3, 3);
        let (outcome, steps) = GreedySelector::new(&index, 1).run_counted();
        assert!(outcome.is_satisfied());
        assert_eq!(steps, 10);
    }

    #[test]
    fn test_multiplicity_is_met() {
        let index = CoverageIndex::for_universe(7, 4, 3, 2);
        let outcome = GreedySelector::new(&index, 2).run();
        assert!(outcome.is_satisfied());
        let selection = outcome.selection();
        for j_id in 0..index.num_j_groups() {
            assert!(selection.satisfied_count(j_id) >= 2);
        }
    }
}
