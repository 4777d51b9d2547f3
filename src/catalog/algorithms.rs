use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::searching::{binary_search_iterative, binary_search_recursive_slice, linear_search};
use crate::sorting::{bubble_sort, insertion_sort, merge_sort, quick_sort_slice};
use crate::types::profile::{AlgorithmProfile, Complexity};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Insertion,
    Bubble,
    Merge,
    Quick,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Bubble,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }

    pub fn profile(&self) -> AlgorithmProfile {
        use Complexity::*;

        let (best, average, worst, auxiliary_space, stable, in_place) = match self {
            SortAlgorithm::Insertion => (Linear, Quadratic, Quadratic, Constant, true, true),
            SortAlgorithm::Bubble => (Linear, Quadratic, Quadratic, Constant, true, true),
            SortAlgorithm::Merge => {
                (Linearithmic, Linearithmic, Linearithmic, Linear, true, false)
            }
            SortAlgorithm::Quick => {
                (Linearithmic, Linearithmic, Quadratic, Logarithmic, false, true)
            }
        };

        AlgorithmProfile {
            name: self.name().to_string(),
            best,
            average,
            worst,
            auxiliary_space,
            stable,
            in_place,
            requires_sorted_input: false,
        }
    }

    /// Sort `seq` ascending with this algorithm.
    ///
    /// Merge sort does not work in place; its output is written back over
    /// `seq` so every variant leaves the result in the caller's slice.
    pub fn sort<T: Ord + Clone>(&self, seq: &mut [T]) {
        log::debug!("dispatching {} sort over {} elements", self, seq.len());

        match self {
            SortAlgorithm::Insertion => insertion_sort(seq),
            SortAlgorithm::Bubble => bubble_sort(seq),
            SortAlgorithm::Merge => {
                let sorted = merge_sort(seq);
                seq.clone_from_slice(&sorted);
            }
            SortAlgorithm::Quick => quick_sort_slice(seq),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| CatalogError::UnknownAlgorithm(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    Linear,
    BinaryIterative,
    BinaryRecursive,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::BinaryIterative,
        SearchAlgorithm::BinaryRecursive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::BinaryIterative => "binary_iterative",
            SearchAlgorithm::BinaryRecursive => "binary_recursive",
        }
    }

    pub fn profile(&self) -> AlgorithmProfile {
        use Complexity::*;

        let (average, auxiliary_space, requires_sorted_input) = match self {
            SearchAlgorithm::Linear => (Linear, Constant, false),
            SearchAlgorithm::BinaryIterative => (Logarithmic, Constant, true),
            SearchAlgorithm::BinaryRecursive => (Logarithmic, Logarithmic, true),
        };

        // Searches never reorder anything: stable and in place trivially.
        AlgorithmProfile {
            name: self.name().to_string(),
            best: Constant,
            average,
            worst: average,
            auxiliary_space,
            stable: true,
            in_place: true,
            requires_sorted_input,
        }
    }

    /// Search `seq` for `target` with this algorithm.
    ///
    /// The binary variants assume `seq` is sorted ascending.
    pub fn search<T: Ord>(&self, seq: &[T], target: &T) -> Option<usize> {
        log::debug!("dispatching {} search over {} elements", self, seq.len());

        match self {
            SearchAlgorithm::Linear => linear_search(seq, target),
            SearchAlgorithm::BinaryIterative => binary_search_iterative(seq, target),
            SearchAlgorithm::BinaryRecursive => binary_search_recursive_slice(seq, target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| CatalogError::UnknownAlgorithm(s.to_string()))
    }
}
