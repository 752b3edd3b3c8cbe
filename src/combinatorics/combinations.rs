// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lexicographic combination enumeration.
//!
//! # Algorithm
//!
//! The iterator holds the current index vector `c[0] < c[1] < ... < c[r-1]`.
//! To advance, find the rightmost position `i` with `c[i] != i + len - r`,
//! increment it, and reset every later position to the smallest increasing
//! run after it. When no such position exists, the enumeration is finished.
//!
//! # Example
//!
//! ```
//! use covering_design::combinatorics::Combinations;
//!
//! let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
//! assert_eq!(combos.len(), 6);
//! assert_eq!(combos[0], vec![0, 1]);
//! assert_eq!(combos[5], vec![2, 3]);
//! ```

/// Binomial coefficient C(n, r).
///
/// Returns 0 when `r > n`. Computed multiplicatively so intermediate values
/// stay within `u128` for every size an ElementSet can hold.
pub fn choose(n: usize, r: usize) -> u128 {
    if r > n {
        return 0;
    }
    let r = r.min(n - r);
    let mut result = 1u128;
    for i in 0..r {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result
}

/// Lazy iterator over all size-`r` index combinations of `0..len`.
///
/// Each combination is produced exactly once, in strict lexicographic order.
/// A new iterator (or a clone taken before iteration) replays the same order.
#[derive(Debug, Clone)]
pub struct Combinations {
    len: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Enumerate size-`r` subsets of `0..len`. Yields nothing if `r > len`.
    pub fn new(len: usize, r: usize) -> Self {
        Self {
            len,
            indices: (0..r).collect(),
            started: false,
            done: r > len,
        }
    }

    /// Enumerate size-`r` subsets of `items`, yielding the items themselves.
    pub fn of<'a, T>(items: &'a [T], r: usize) -> impl Iterator<Item = Vec<&'a T>> + 'a {
        Self::new(items.len(), r).map(move |combo| combo.into_iter().map(|i| &items[i]).collect())
    }

    fn advance(&mut self) -> bool {
        let r = self.indices.len();
        let Some(i) = (0..r).rev().find(|&i| self.indices[i] != i + self.len - r) else {
            return false;
        };
        self.indices[i] += 1;
        for next in (i + 1)..r {
            self.indices[next] = self.indices[next - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.indices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose() {
        assert_eq!(choose(9, 4), 126);
        assert_eq!(choose(7, 4), 35);
        assert_eq!(choose(25, 7), 480_700);
        assert_eq!(choose(5, 0), 1);
        assert_eq!(choose(5, 5), 1);
        assert_eq!(choose(3, 4), 0);
        assert_eq!(choose(64, 32), 1_832_624_140_942_590_534);
    }

    #[test]
    fn test_lexicographic_order() {
        let combos: Vec<_> = Combinations::new(5, 3).collect();
        assert_eq!(combos.len(), 10);
        assert_eq!(combos[0], vec![0, 1, 2]);
        assert_eq!(combos[1], vec![0, 1, 3]);
        assert_eq!(combos[2], vec![0, 1, 4]);
        assert_eq!(combos[3], vec![0, 2, 3]);
        assert_eq!(combos[9], vec![2, 3, 4]);
        assert!(combos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_r_exceeds_len() {
        assert_eq!(Combinations::new(3, 4).count(), 0);
    }

    #[test]
    fn test_r_zero_and_full() {
        assert_eq!(Combinations::new(4, 0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(Combinations::new(4, 4).collect::<Vec<_>>(), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_restartable() {
        let fresh = Combinations::new(6, 3);
        let replay = fresh.clone();
        assert_eq!(fresh.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
    }

    #[test]
    fn test_of_items() {
        let items = ["A", "B", "C"];
        let pairs: Vec<Vec<&&str>> = Combinations::of(&items, 2).collect();
        assert_eq!(pairs, vec![vec![&"A", &"B"], vec![&"A", &"C"], vec![&"B", &"C"]]);
    }
}
