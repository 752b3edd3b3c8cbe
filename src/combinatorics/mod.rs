// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combinatorial primitives.
//!
//! - Combinations: lexicographic enumeration of fixed-size index subsets
//! - choose: binomial coefficients
//! - ElementSet: bitset over universe positions

pub mod combinations;
pub mod element_set;

pub use combinations::{choose, Combinations};
pub use element_set::{ElementSet, MAX_ELEMENTS};
