// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection engine.
//!
//! Two selectors work over the same [`SelectionContext`]:
//!
//! - [`greedy`]: repeatedly picks the k-group covering the most unsatisfied
//!   j-groups. Fast, not necessarily minimal. Ends `Satisfied` or `Stalled`.
//! - [`exact`]: builds a 0/1 covering program and hands it to an injected
//!   [`IlpSolver`]. Ends `Optimal`, `Infeasible` or `SolverFault`.
//!
//! Both entry points validate their parameters before any enumeration and
//! build a fresh context per call.
//!
//! # Example
//!
//! ```
//! use covering_design::engine::{select_greedy, GreedyOutcome};
//! use covering_design::problem::Universe;
//!
//! let universe = Universe::lettered(7).unwrap();
//! match select_greedy(&universe, 4, 4, 3, 1).unwrap() {
//!     GreedyOutcome::Satisfied(selection) => assert!(selection.is_complete()),
//!     GreedyOutcome::Stalled(diagnostic) => panic!("stalled: {:?}", diagnostic.unsatisfied),
//! }
//! ```

pub mod exact;
pub mod greedy;
pub mod solver;

pub use exact::{ExactOutcome, ExactSelector};
pub use greedy::{GreedyOutcome, GreedySelector, GreedyState, StalledDiagnostic};
pub use solver::{CoverConstraint, CoverModel, IlpSolver, MicrolpSolver, SolveStatus, SolverKind};

use crate::context::SelectionContext;
use crate::error::Result;
use crate::problem::{Parameters, Universe};

/// Greedy selection over every k-group of `universe`.
pub fn select_greedy(
    universe: &Universe,
    k: usize,
    j: usize,
    s: usize,
    coverage: usize,
) -> Result<GreedyOutcome> {
    let params = Parameters::for_universe_size(universe.len(), k, j, s, coverage);
    let mut ctx = SelectionContext::new(universe.clone(), params)?;
    Ok(greedy::run(&mut ctx))
}

/// Exact selection over every k-group of `universe`, solved by `selector`.
pub fn select_exact(
    universe: &Universe,
    k: usize,
    j: usize,
    s: usize,
    coverage: usize,
    selector: &ExactSelector,
) -> Result<ExactOutcome> {
    let params = Parameters::for_universe_size(universe.len(), k, j, s, coverage);
    let mut ctx = SelectionContext::new(universe.clone(), params)?;
    selector.select(&mut ctx)
}
