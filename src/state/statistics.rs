// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the selection context and incremented by the
//! index builder and the selectors as a run progresses.

use serde::Serialize;
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    KGroups,
    JGroups,
    SSubgroups,
    CoveragePairs,
    GreedySteps,
    ModelVariables,
    ModelConstraints,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    pub fn set(&mut self, counter: Counters, value: u64) {
        self.stats[counter as usize] = value;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Non-zero counters, in declaration order.
    pub fn non_zero(&self) -> impl Iterator<Item = (Counters, u64)> + '_ {
        Counters::iter()
            .map(|c| (c, self.get(c)))
            .filter(|&(_, value)| value != 0)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (counter, value)) in self.non_zero().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

impl Serialize for Statistics {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;
        for (counter, value) in self.non_zero() {
            let name: &'static str = counter.into();
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
