// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for small covering designs.
//!
//! Given a universe of `n` labeled samples, choose as few size-`k` groups as
//! possible so that every size-`j` group of the universe has at least
//! `coverage` chosen k-groups each containing one of its size-`s` subgroups.
//! This is the construction behind lottery "guarantee" wheels.
//!
//! # Architecture
//!
//! The implementation uses a two-tier data model:
//!
//! ## Tier 1: Derived data (immutable)
//!
//! Computed once per run and never changed during selection:
//! - k-groups and j-groups in lexicographic enumeration order
//! - the coverage relation between them, in both directions
//!
//! ## Tier 2: Selection state (mutable)
//!
//! - Selection - picked k-groups and per-j-group satisfied counts
//! - Statistics - per-run counters
//!
//! Both tiers live in a [`SelectionContext`], one per run.
//!
//! # Selectors
//!
//! 1. **Greedy**: pick the k-group covering the most unsatisfied j-groups until
//!    every j-group is satisfied or no candidate helps (`Stalled`).
//! 2. **Exact**: minimize the number of k-groups with a 0/1 integer program,
//!    solved by an injected [`engine::IlpSolver`].
//!
//! # Around the engine
//!
//! - [`report`]: canonical listings and the persisted record
//! - [`store`]: a directory of saved records
//! - [`runner`]: run a selection on a worker and await its single outcome
//! - [`config`]: front-end configuration and input bounds

pub mod combinatorics;
pub mod config;
pub mod context;
pub mod coverage;
pub mod engine;
pub mod error;
pub mod problem;
pub mod report;
pub mod runner;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use context::SelectionContext;
pub use engine::{select_exact, select_greedy, ExactOutcome, ExactSelector, GreedyOutcome};
pub use error::{CoverError, ParameterError};
pub use problem::{Parameters, Universe};
pub use state::Selection;
