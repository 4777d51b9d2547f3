use std::fmt;

use serde::{Deserialize, Serialize};

/// Asymptotic growth classes used by the algorithm catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
}

impl Complexity {
    /// Big-O notation, e.g. `O(n log n)`.
    pub fn notation(&self) -> &'static str {
        match self {
            Complexity::Constant => "O(1)",
            Complexity::Logarithmic => "O(log n)",
            Complexity::Linear => "O(n)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Quadratic => "O(n^2)",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

/// Static description of one algorithm.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmProfile {
    pub name: String,

    pub best: Complexity,
    pub average: Complexity,
    pub worst: Complexity,
    /// Extra memory beyond the input, recursion stack included.
    pub auxiliary_space: Complexity,

    pub stable: bool,
    pub in_place: bool,
    pub requires_sorted_input: bool,
}
