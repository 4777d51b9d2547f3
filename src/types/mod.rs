pub mod bounds;
pub mod profile;

pub use bounds::{Bounds, BoundsError};
pub use profile::{AlgorithmProfile, Complexity};
