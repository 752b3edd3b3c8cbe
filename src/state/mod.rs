// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable run state.
//!
//! - Selection: picked k-groups and per-j-group satisfied counts
//! - Statistics: per-run counters

pub mod selection;
pub mod statistics;

pub use selection::Selection;
pub use statistics::{Counters, Statistics};
