// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The 0/1 covering program and the solvers that can answer it.
//!
//! The exact selector never talks to a solver library directly: it builds a
//! [`CoverModel`] and hands it to whatever [`IlpSolver`] it was constructed
//! with.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

/// One `sum(x_v for v in vars) >= rhs` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverConstraint {
    pub vars: Vec<usize>,
    pub rhs: usize,
}

/// Minimize `sum(x_v)` over binary `x_v`, subject to every constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverModel {
    pub num_vars: usize,
    pub constraints: Vec<CoverConstraint>,
}

/// What a solver made of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// Proven optimal. One flag per variable, true where `x_v = 1`.
    Optimal(Vec<bool>),
    Infeasible,
    /// Any other failure, described by the solver.
    Fault(String),
}

/// A 0/1 integer programming capability.
pub trait IlpSolver: Debug + Send + Sync {
    fn solve(&self, model: &CoverModel) -> SolveStatus;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Solvers that can be selected by name in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    #[default]
    Microlp,
}

impl SolverKind {
    pub fn build(self) -> Box<dyn IlpSolver> {
        match self {
            SolverKind::Microlp => Box::new(MicrolpSolver),
        }
    }
}

impl FromStr for SolverKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "microlp" => Ok(SolverKind::Microlp),
            other => Err(ConfigError::UnknownSolver(other.to_string())),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Microlp => write!(f, "microlp"),
        }
    }
}

/// Branch-and-bound MILP solver from the `microlp` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl IlpSolver for MicrolpSolver {
    fn solve(&self, model: &CoverModel) -> SolveStatus {
        use microlp::{ComparisonOp, Error, LinearExpr, OptimizationDirection, Problem};

        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let vars: Vec<_> = (0..model.num_vars)
            .map(|_| problem.add_binary_var(1.0))
            .collect();

        for constraint in &model.constraints {
            let mut expr = LinearExpr::empty();
            for &v in &constraint.vars {
                expr.add(vars[v], 1.0);
            }
            problem.add_constraint(expr, ComparisonOp::Ge, constraint.rhs as f64);
        }

        match problem.solve() {
            Ok(solution) => SolveStatus::Optimal(vars.iter().map(|&var| solution[var] > 0.5).collect()),
            Err(Error::Infeasible) => SolveStatus::Infeasible,
            Err(err) => SolveStatus::Fault(err.to_string()),
        }
    }

    fn name(&self) -> &str {
        "microlp"
    }
}
