// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact selection by 0/1 integer programming.
//!
//! One binary variable per candidate k-group, objective `min sum(x_k)`, and
//! one constraint per j-group: the variables of the k-groups covering it must
//! sum to at least `coverage`. A j-group with no covering k-group at all makes
//! the instance structurally infeasible; that is reported before any model is
//! handed to the solver.

use crate::combinatorics::choose;
use crate::context::SelectionContext;
use crate::engine::solver::{CoverConstraint, CoverModel, IlpSolver, SolveStatus, SolverKind};
use crate::error::{self, ConfigError, CoverError};
use crate::problem::Parameters;
use crate::state::{Counters, Selection};
use log::{info, warn};

/// Above this many variables the bundled branch-and-bound solver may need
/// minutes to prove optimality (84 variables for n=9, k=6 take about three
/// minutes in a release build).
pub const SLOW_MODEL_VARIABLES: usize = 64;

/// Would an exact run over every k-group for `params` exceed
/// [`SLOW_MODEL_VARIABLES`]?
pub fn is_slow_model(params: &Parameters) -> bool {
    choose(params.n, params.k) > SLOW_MODEL_VARIABLES as u128
}

/// Terminal result of an exact run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExactOutcome {
    /// Minimum-size selection meeting every coverage constraint.
    Optimal(Selection),
    /// The solver proved no selection meets the constraints.
    Infeasible,
    /// The solver failed or gave no optimal answer.
    SolverFault(String),
}

impl ExactOutcome {
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            ExactOutcome::Optimal(selection) => Some(selection),
            _ => None,
        }
    }
}

/// Exact selector bound to one ILP solver.
#[derive(Debug)]
pub struct ExactSelector {
    solver: Box<dyn IlpSolver>,
}

impl ExactSelector {
    pub fn new(solver: Box<dyn IlpSolver>) -> Self {
        Self { solver }
    }

    pub fn from_kind(kind: SolverKind) -> Self {
        Self::new(kind.build())
    }

    /// Construct from a configured solver name; unknown names are rejected here.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_kind(name.parse()?))
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    /// Build the covering program for a context.
    ///
    /// Fails with `StructuralInfeasibility` on the first j-group (in
    /// enumeration order) that no candidate k-group covers.
    pub fn build_model(ctx: &SelectionContext) -> error::Result<CoverModel> {
        let index = ctx.index();
        let coverage = ctx.params().coverage;

        if let Some(j_id) = index.uncovered_j_groups().next() {
            return Err(CoverError::StructuralInfeasibility {
                j_group: ctx.j_group_labels(j_id),
            });
        }

        let constraints = (0..index.num_j_groups())
            .map(|j_id| CoverConstraint {
                vars: index.covered_by(j_id).to_vec(),
                rhs: coverage,
            })
            .collect();

        Ok(CoverModel {
            num_vars: index.num_k_groups(),
            constraints,
        })
    }

    /// Build one model, solve it, and decode the answer.
    pub fn select(&self, ctx: &mut SelectionContext) -> error::Result<ExactOutcome> {
        let model = Self::build_model(ctx)?;
        ctx.statistics.set(Counters::ModelVariables, model.num_vars as u64);
        ctx.statistics.set(Counters::ModelConstraints, model.constraints.len() as u64);

        info!(
            "[Exact] Solving with {}: {} variables, {} constraints",
            self.solver.name(),
            model.num_vars,
            model.constraints.len()
        );
        if model.num_vars > SLOW_MODEL_VARIABLES {
            warn!(
                "[Exact] {} variables exceed {}; proving optimality may take minutes",
                model.num_vars, SLOW_MODEL_VARIABLES
            );
        }

        let outcome = match self.solver.solve(&model) {
            SolveStatus::Optimal(values) => {
                let picks: Vec<usize> = values
                    .iter()
                    .enumerate()
                    .filter(|&(_, &chosen)| chosen)
                    .map(|(k_id, _)| k_id)
                    .collect();
                let selection = Selection::from_picks(ctx.index(), ctx.params().coverage, &picks);
                if selection.is_complete() {
                    info!("[Exact] Optimal with {} k-groups", selection.len());
                    ExactOutcome::Optimal(selection)
                } else {
                    ExactOutcome::SolverFault(format!(
                        "solver reported optimal but {} j-groups are below coverage",
                        selection.unsatisfied_count()
                    ))
                }
            }
            SolveStatus::Infeasible => ExactOutcome::Infeasible,
            SolveStatus::Fault(message) => ExactOutcome::SolverFault(message),
        };

        if !matches!(outcome, ExactOutcome::Optimal(_)) {
            warn!("[Exact] No optimal selection: {:?}", outcome);
        }
        Ok(outcome)
    }
}
