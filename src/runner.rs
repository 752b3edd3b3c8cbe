// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run one selection off the caller's thread.
//!
//! [`submit`] moves a [`SelectionRequest`] onto tokio's blocking pool and
//! returns a [`SelectionTask`]. Awaiting the task yields exactly one terminal
//! result. There is no cancellation: dropping the task detaches the worker,
//! which still runs to completion.
//!
//! # Example
//!
//! ```
//! use covering_design::runner::{submit, Algorithm, SelectionRequest};
//! use covering_design::problem::{Parameters, Universe};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let request = SelectionRequest::new(
//!     Universe::lettered(7).unwrap(),
//!     Parameters::for_universe_size(7, 4, 4, 3, 1),
//!     Algorithm::Greedy,
//! );
//! let report = submit(request).join().await.unwrap();
//! assert!(report.outcome.is_success());
//! # });
//! ```

use crate::context::SelectionContext;
use crate::engine::{greedy, ExactOutcome, ExactSelector, GreedyOutcome, SolverKind};
use crate::error::{CoverError, Result};
use crate::problem::{Parameters, Universe};
use crate::report::{CanonicalSelection, ResultRecord};
use crate::state::{Selection, Statistics};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Which selector to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Greedy,
    Exact,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Greedy => write!(f, "greedy"),
            Algorithm::Exact => write!(f, "exact"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionRequest {
    pub universe: Universe,
    pub params: Parameters,
    pub algorithm: Algorithm,
    pub solver: SolverKind,
}

impl SelectionRequest {
    pub fn new(universe: Universe, params: Parameters, algorithm: Algorithm) -> Self {
        Self {
            universe,
            params,
            algorithm,
            solver: SolverKind::default(),
        }
    }

    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    /// Run the request on the current thread.
    pub fn execute(self) -> Result<RunReport> {
        let started = Instant::now();
        info!(
            "[Runner] {} selection with {} over [{}]",
            self.algorithm, self.params, self.universe
        );

        let mut ctx = SelectionContext::new(self.universe.clone(), self.params)?;
        let outcome = match self.algorithm {
            Algorithm::Greedy => RunOutcome::Greedy(greedy::run(&mut ctx)),
            Algorithm::Exact => {
                RunOutcome::Exact(ExactSelector::from_kind(self.solver).select(&mut ctx)?)
            }
        };

        let elapsed = started.elapsed();
        info!("[Runner] Finished in {:?} ({})", elapsed, ctx.statistics);
        Ok(RunReport {
            universe: self.universe,
            params: self.params,
            algorithm: self.algorithm,
            outcome,
            statistics: ctx.statistics,
            elapsed,
        })
    }
}

/// Terminal outcome of either selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Greedy(GreedyOutcome),
    Exact(ExactOutcome),
}

impl RunOutcome {
    /// The selection, when the run met every coverage constraint.
    pub fn complete_selection(&self) -> Option<&Selection> {
        match self {
            RunOutcome::Greedy(GreedyOutcome::Satisfied(selection)) => Some(selection),
            RunOutcome::Exact(ExactOutcome::Optimal(selection)) => Some(selection),
            _ => None,
        }
    }

    /// Any selection produced, complete or partial.
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            RunOutcome::Greedy(outcome) => Some(outcome.selection()),
            RunOutcome::Exact(outcome) => outcome.selection(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.complete_selection().is_some()
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Greedy(GreedyOutcome::Satisfied(_)) => write!(f, "satisfied"),
            RunOutcome::Greedy(GreedyOutcome::Stalled(d)) => {
                write!(f, "stalled with {} j-groups below coverage", d.unsatisfied.len())
            }
            RunOutcome::Exact(ExactOutcome::Optimal(_)) => write!(f, "optimal"),
            RunOutcome::Exact(ExactOutcome::Infeasible) => write!(f, "infeasible"),
            RunOutcome::Exact(ExactOutcome::SolverFault(message)) => {
                write!(f, "solver fault: {}", message)
            }
        }
    }
}

/// Everything a front end needs to display or save a finished run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub universe: Universe,
    pub params: Parameters,
    pub algorithm: Algorithm,
    pub outcome: RunOutcome,
    pub statistics: Statistics,
    pub elapsed: Duration,
}

impl RunReport {
    /// Canonical listing of whatever selection the run produced.
    pub fn listing(&self) -> Option<CanonicalSelection> {
        self.outcome
            .selection()
            .map(|selection| CanonicalSelection::from_selection(selection, &self.universe))
    }

    /// A record for saving; only complete selections are saved.
    pub fn to_record(&self, run_index: u32) -> Option<ResultRecord> {
        self.outcome.complete_selection().map(|selection| {
            ResultRecord::new(
                self.params,
                run_index,
                CanonicalSelection::from_selection(selection, &self.universe),
            )
        })
    }
}

/// Handle to a selection running on a worker.
#[derive(Debug)]
pub struct SelectionTask {
    handle: JoinHandle<Result<RunReport>>,
}

impl SelectionTask {
    /// Wait for the single terminal result.
    pub async fn join(self) -> Result<RunReport> {
        match self.handle.await {
            Ok(result) => result,
            Err(err) => Err(CoverError::Worker(err.to_string())),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Start a selection on tokio's blocking pool. Must be called inside a runtime.
pub fn submit(request: SelectionRequest) -> SelectionTask {
    SelectionTask {
        handle: tokio::task::spawn_blocking(move || request.execute()),
    }
}
