use serde::{Deserialize, Serialize};

use crate::catalog::algorithms::{SearchAlgorithm, SortAlgorithm};

/// Thresholds behind the recommendations. `v0()` pins the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceConfig {
    /// Inputs shorter than this count as small.
    pub small_input_threshold: usize,
}

impl AdviceConfig {
    pub fn v0() -> Self {
        Self {
            small_input_threshold: 50,
        }
    }

    fn is_small(&self, len: usize) -> bool {
        len < self.small_input_threshold
    }
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// What the caller knows about the data it is about to sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortWorkload {
    pub len: usize,
    pub nearly_sorted: bool,
    pub require_stable: bool,
    pub memory_constrained: bool,
    pub teaching: bool,
}

/// Pick a sort for `workload`. The first matching rule wins:
///
/// 1. teaching or demonstration: bubble
/// 2. nearly sorted or small input: insertion
/// 3. stability required: merge
/// 4. tight on memory: quick
/// 5. anything else: merge, for its guaranteed O(n log n)
pub fn recommend_sort(workload: &SortWorkload, config: &AdviceConfig) -> SortAlgorithm {
    let choice = if workload.teaching {
        SortAlgorithm::Bubble
    } else if workload.nearly_sorted || config.is_small(workload.len) {
        SortAlgorithm::Insertion
    } else if workload.require_stable {
        SortAlgorithm::Merge
    } else if workload.memory_constrained {
        SortAlgorithm::Quick
    } else {
        SortAlgorithm::Merge
    };

    log::debug!("recommended {choice} sort for {workload:?}");
    choice
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWorkload {
    pub len: usize,
    pub sorted: bool,
    /// How many lookups will run against the same data.
    pub expected_queries: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchAdvice {
    pub algorithm: SearchAlgorithm,
    /// Sort the data once before searching it.
    pub sort_first: bool,
}

/// Pick a search for `workload`.
///
/// Small inputs always get a linear scan. Large sorted inputs get binary
/// search. Large unsorted inputs that will be queried more than once are
/// worth sorting up front, after which binary search applies.
pub fn recommend_search(workload: &SearchWorkload, config: &AdviceConfig) -> SearchAdvice {
    let advice = if config.is_small(workload.len) {
        SearchAdvice {
            algorithm: SearchAlgorithm::Linear,
            sort_first: false,
        }
    } else if workload.sorted {
        SearchAdvice {
            algorithm: SearchAlgorithm::BinaryIterative,
            sort_first: false,
        }
    } else if workload.expected_queries > 1 {
        SearchAdvice {
            algorithm: SearchAlgorithm::BinaryIterative,
            sort_first: true,
        }
    } else {
        SearchAdvice {
            algorithm: SearchAlgorithm::Linear,
            sort_first: false,
        }
    };

    log::debug!("recommended {} search for {workload:?}", advice.algorithm);
    advice
}
