//! Comparison sorts.
//!
//! [`bubble_sort`], [`insertion_sort`] and [`quick_sort`] rearrange the
//! caller's slice in place. [`merge_sort`] borrows its input and returns a
//! freshly allocated `Vec`, so the original ordering survives the call.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::{merge, merge_sort};
pub use quick::{partition, quick_sort, quick_sort_slice};
