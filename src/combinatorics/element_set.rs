// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ElementSet type for representing groups of universe elements as bitsets.
//!
//! An ElementSet is a compact representation of a set of universe positions
//! using a bitset, where bit i represents the presence of element i.
//!
//! # Examples
//!
//! ```
//! use covering_design::combinatorics::ElementSet;
//!
//! let mut set = ElementSet::empty();
//! set.insert(0);
//! set.insert(2);
//! set.insert(5);
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(format!("{}", set), "{0,2,5}");
//!
//! let members: Vec<usize> = set.iter().collect();
//! assert_eq!(members, vec![0, 2, 5]);
//! ```

use crate::combinatorics::Combinations;
use std::fmt;

/// Maximum number of elements an ElementSet can hold (the bitset width).
pub const MAX_ELEMENTS: usize = u64::BITS as usize;

/// A set of universe positions represented as a bitset.
///
/// Bit i (counting from LSB) is set if element i is in the set.
/// Insert, remove, contains, subset and intersection are all O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ElementSet(u64);

impl ElementSet {
    /// Create an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a set containing positions `0..n`.
    pub fn full(n: usize) -> Self {
        debug_assert!(n <= MAX_ELEMENTS);
        if n >= MAX_ELEMENTS {
            Self(u64::MAX)
        } else {
            Self((1u64 << n) - 1)
        }
    }

    /// Create a set from a slice of positions.
    pub fn from_positions(positions: &[usize]) -> Self {
        let mut set = Self::empty();
        for &position in positions {
            set.insert(position);
        }
        set
    }

    /// Create a set from a raw bit value.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Check if the set contains a position.
    pub fn contains(self, position: usize) -> bool {
        position < MAX_ELEMENTS && (self.0 >> position) & 1 != 0
    }

    /// Insert a position into the set.
    pub fn insert(&mut self, position: usize) {
        debug_assert!(position < MAX_ELEMENTS, "position out of range: {}", position);
        self.0 |= 1 << position;
    }

    /// Remove a position from the set.
    pub fn remove(&mut self, position: usize) {
        if position < MAX_ELEMENTS {
            self.0 &= !(1 << position);
        }
    }

    /// Number of elements (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    /// True if every element of `self` is also in `other`.
    pub fn is_subset(self, other: ElementSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn intersection(self, other: ElementSet) -> ElementSet {
        Self(self.0 & other.0)
    }

    /// Size of the intersection, without materialising it.
    pub fn intersection_len(self, other: ElementSet) -> usize {
        (self.0 & other.0).count_ones() as usize
    }

    /// Iterate over the positions in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        ElementSetIter { bits: self.0 }
    }

    /// All size-`r` subsets of this set, in lexicographic order of members.
    pub fn subsets(self, r: usize) -> impl Iterator<Item = ElementSet> {
        let members: Vec<usize> = self.iter().collect();
        Combinations::new(members.len(), r)
            .map(move |combo| combo.iter().map(|&i| members[i]).collect())
    }
}

/// Iterator over positions in an ElementSet.
struct ElementSetIter {
    bits: u64,
}

impl Iterator for ElementSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let position = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(position)
    }
}

impl FromIterator<usize> for ElementSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::empty();
        for position in iter {
            set.insert(position);
        }
        set
    }
}

impl fmt::Display for ElementSet {
    /// Format a set as "{0,2,5}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, position) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", position)?;
        }
        write!(f, "}}")
    }
}

impl From<&[usize]> for ElementSet {
    fn from(positions: &[usize]) -> Self {
        Self::from_positions(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = ElementSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.bits(), 0);
    }

    #[test]
    fn test_full() {
        let set = ElementSet::full(9);
        assert_eq!(set.len(), 9);
        for i in 0..9 {
            assert!(set.contains(i));
        }
        assert!(!set.contains(9));
        assert_eq!(ElementSet::full(64).len(), 64);
    }

    #[test]
    fn test_insert_remove() {
        let mut set = ElementSet::empty();
        set.insert(3);
        set.insert(7);
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert_eq!(set.len(), 2);

        set.remove(3);
        set.remove(3); // idempotent
        assert!(!set.contains(3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_subset_and_intersection() {
        let k = ElementSet::from_positions(&[0, 1, 2, 3, 4, 5]);
        let j = ElementSet::from_positions(&[1, 3, 6]);

        assert!(ElementSet::from_positions(&[1, 3]).is_subset(k));
        assert!(!j.is_subset(k));
        assert!(ElementSet::empty().is_subset(j));
        assert_eq!(k.intersection(j), ElementSet::from_positions(&[1, 3]));
        assert_eq!(k.intersection_len(j), 2);
    }

    #[test]
    fn test_iter_ascending() {
        let set = ElementSet::from_positions(&[9, 0, 63, 4]);
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec![0, 4, 9, 63]);
    }

    #[test]
    fn test_subsets() {
        let set = ElementSet::from_positions(&[1, 4, 6, 8]);
        let pairs: Vec<_> = set.subsets(2).collect();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], ElementSet::from_positions(&[1, 4]));
        assert_eq!(pairs[5], ElementSet::from_positions(&[6, 8]));
        assert!(pairs.iter().all(|p| p.is_subset(set)));

        assert_eq!(set.subsets(5).count(), 0);
        assert_eq!(set.subsets(0).collect::<Vec<_>>(), vec![ElementSet::empty()]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ElementSet::empty()), "{}");
        assert_eq!(format!("{}", ElementSet::from_positions(&[2, 0])), "{0,2}");
    }
}
