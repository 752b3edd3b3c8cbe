// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Result assembly.
//!
//! A [`CanonicalSelection`] is the selector-independent form of a result:
//! each k-group as a sorted list of labels, the groups sorted and
//! deduplicated. A [`ResultRecord`] wraps it with the run parameters and run
//! index for persistence.

pub mod record;

pub use record::ResultRecord;

use crate::problem::Universe;
use crate::state::Selection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, deduplicated listing of selected k-groups by label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalSelection {
    groups: Vec<Vec<String>>,
}

impl CanonicalSelection {
    /// Canonicalize a selection against the universe it was made from.
    pub fn from_selection(selection: &Selection, universe: &Universe) -> Self {
        Self::from_groups(selection.groups().iter().map(|&set| universe.labels_of(set)))
    }

    /// Canonicalize arbitrary label lists.
    pub fn from_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut groups: Vec<Vec<String>> = groups
            .into_iter()
            .map(|mut group| {
                group.sort();
                group.dedup();
                group
            })
            .collect();
        groups.sort();
        groups.dedup();
        Self { groups }
    }

    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_groups(self) -> Vec<Vec<String>> {
        self.groups
    }
}

impl fmt::Display for CanonicalSelection {
    /// One numbered line per group: `  1. A,B,C,D,E,F`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, group.join(","))?;
        }
        Ok(())
    }
}
