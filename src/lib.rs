//! Canonical comparison sorts and searches over in-memory slices.
//!
//! `sortsearch-core` provides insertion, bubble, merge and quick sort, plus
//! linear search and binary search in loop and recursive form. Every
//! operation is a stateless function over a slice.
//!
//! In-place sorts take `&mut [T]`; merge sort takes `&[T]` and returns a new
//! `Vec<T>`. Searches report a missing target as `None`, never as a magic
//! index.
//!
//! The [`catalog`] module describes each algorithm (complexity, stability,
//! memory) and recommends one for a described workload.
//!
//! ```rust
//! use sortsearch_core::{binary_search_iterative, merge_sort};
//!
//! let sorted = merge_sort(&[5, 3, 4, 1, 2]);
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//! assert_eq!(binary_search_iterative(&sorted, &4), Some(3));
//! ```

pub mod catalog;
pub mod searching;
pub mod sorting;
pub mod types;

pub use searching::{
    binary_search_iterative, binary_search_recursive, binary_search_recursive_slice, linear_search,
};
pub use sorting::{
    bubble_sort, insertion_sort, merge, merge_sort, partition, quick_sort, quick_sort_slice,
};
pub use types::{AlgorithmProfile, Bounds, BoundsError, Complexity};
