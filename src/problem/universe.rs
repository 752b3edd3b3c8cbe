// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The sample universe: an ordered list of distinct element labels.

use crate::combinatorics::{ElementSet, MAX_ELEMENTS};
use crate::error::ParameterError;
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;

/// Ordered, deduplicated element labels for one run.
///
/// Element positions (0..n) are what ElementSets refer to; labels only
/// matter for display and persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    labels: Vec<String>,
}

impl Universe {
    /// Build a universe from labels, rejecting empty or duplicate labels.
    pub fn new<I, S>(labels: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() > MAX_ELEMENTS {
            return Err(ParameterError::UniverseTooLarge {
                n: labels.len(),
                max: MAX_ELEMENTS,
            });
        }
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if label.is_empty() {
                return Err(ParameterError::EmptyLabel);
            }
            if !seen.insert(label.as_str()) {
                return Err(ParameterError::DuplicateElement(label.clone()));
            }
        }
        Ok(Self { labels })
    }

    /// Parse a comma separated list such as `"A, B,C"`.
    ///
    /// Blank entries are skipped.
    pub fn parse(input: &str) -> Result<Self, ParameterError> {
        Self::new(input.split(',').map(str::trim).filter(|s| !s.is_empty()))
    }

    /// The default universe `A, B, C, ...` of size `n` (at most 26).
    pub fn lettered(n: usize) -> Result<Self, ParameterError> {
        if n > 26 {
            return Err(ParameterError::OutOfBounds {
                name: "n",
                value: n,
                min: 0,
                max: 26,
            });
        }
        Self::new((b'A'..).take(n).map(|c| (c as char).to_string()))
    }

    /// Draw `n` distinct codes from the alphabet `01..=m`, sorted ascending.
    ///
    /// Codes are zero-padded to the width of `m` (at least two digits), so
    /// string order agrees with numeric order.
    pub fn random<R: Rng + ?Sized>(m: usize, n: usize, rng: &mut R) -> Result<Self, ParameterError> {
        if n > m {
            return Err(ParameterError::SampleExceedsAlphabet { n, m });
        }
        let width = m.to_string().len().max(2);
        let mut picks = index::sample(rng, m, n).into_vec();
        picks.sort_unstable();
        Self::new(picks.into_iter().map(|i| format!("{:0width$}", i + 1, width = width)))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, position: usize) -> &str {
        &self.labels[position]
    }

    /// Position of a label, if present.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// The set of positions for the given labels.
    pub fn element_set(&self, labels: &[&str]) -> Result<ElementSet, ParameterError> {
        labels
            .iter()
            .map(|label| {
                self.position(label)
                    .ok_or_else(|| ParameterError::UnknownElement(label.to_string()))
            })
            .collect()
    }

    /// Labels of a set, in universe order.
    pub fn labels_of(&self, set: ElementSet) -> Vec<String> {
        set.iter().map(|p| self.labels[p].clone()).collect()
    }

    /// Every position of the universe.
    pub fn all(&self) -> ElementSet {
        ElementSet::full(self.labels.len())
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_trims_and_skips_blanks() {
        let universe = Universe::parse(" A, B ,,C ").unwrap();
        assert_eq!(universe.labels(), &["A", "B", "C"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            Universe::parse("A,B,A"),
            Err(ParameterError::DuplicateElement("A".to_string()))
        );
    }

    #[test]
    fn test_empty_label_rejected() {
        assert_eq!(Universe::new(vec!["A", ""]), Err(ParameterError::EmptyLabel));
    }

    #[test]
    fn test_too_large() {
        let labels: Vec<String> = (0..65).map(|i| i.to_string()).collect();
        assert!(matches!(
            Universe::new(labels),
            Err(ParameterError::UniverseTooLarge { n: 65, .. })
        ));
    }

    #[test]
    fn test_lettered() {
        let universe = Universe::lettered(9).unwrap();
        assert_eq!(universe.to_string(), "A, B, C, D, E, F, G, H, I");
        assert!(Universe::lettered(27).is_err());
    }

    #[test]
    fn test_random_is_sorted_distinct_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let universe = Universe::random(45, 12, &mut rng).unwrap();
        assert_eq!(universe.len(), 12);
        let codes: Vec<usize> = universe.labels().iter().map(|l| l.parse().unwrap()).collect();
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
        assert!(codes.iter().all(|&c| (1..=45).contains(&c)));
        assert!(universe.labels().iter().all(|l| l.len() == 2));
    }

    #[test]
    fn test_random_pads_to_alphabet_width() {
        let mut rng = StdRng::seed_from_u64(3);
        let universe = Universe::random(150, 40, &mut rng).unwrap();
        assert!(universe.labels().iter().all(|l| l.len() == 3));
        let codes: Vec<usize> = universe.labels().iter().map(|l| l.parse().unwrap()).collect();
        assert!(codes.windows(2).all(|w| w[0] < w[1]));

        // String order matches numeric order
        let mut sorted = universe.labels().to_vec();
        sorted.sort();
        assert_eq!(sorted, universe.labels());
    }

    #[test]
    fn test_random_rejects_n_above_m() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Universe::random(5, 6, &mut rng),
            Err(ParameterError::SampleExceedsAlphabet { n: 6, m: 5 })
        );
    }

    #[test]
    fn test_element_set_round_trip() {
        let universe = Universe::lettered(6).unwrap();
        let set = universe.element_set(&["F", "B", "C"]).unwrap();
        assert_eq!(set, ElementSet::from_positions(&[1, 2, 5]));
        assert_eq!(universe.labels_of(set), vec!["B", "C", "F"]);
        assert_eq!(
            universe.element_set(&["Z"]),
            Err(ParameterError::UnknownElement("Z".to_string()))
        );
    }
}
