pub mod binary;
pub mod linear;

pub use binary::{binary_search_iterative, binary_search_recursive, binary_search_recursive_slice};
pub use linear::linear_search;
