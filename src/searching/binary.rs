//! Binary search over an ascending slice, in loop and recursive form.
//!
//! Both forms require `seq` to be sorted ascending. This is not checked:
//! on unsorted input the result is unspecified (some index or `None`), but
//! neither form panics or reads out of bounds.
//!
//! The two forms probe the same midpoints in the same order, so they return
//! the same answer for every input, including which of several equal
//! elements is reported.

use std::cmp::Ordering;

use crate::types::bounds::{Bounds, BoundsError};

pub fn binary_search_iterative<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    log::trace!("binary_search_iterative: len={}", seq.len());

    let (mut low, mut high) = Bounds::full(seq.len()).inclusive()?;

    while low <= high {
        let mid = low + (high - low) / 2;
        match seq[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            // mid == 0 means everything left of it is gone too
            Ordering::Greater => high = mid.checked_sub(1)?,
        }
    }
    None
}

/// Recursive binary search over the inclusive region `[low, high]`.
///
/// A whole-slice search starts at `low = 0, high = seq.len() - 1`; use
/// [`binary_search_recursive_slice`] to have those filled in. An empty `seq`
/// takes `(0, 0)` and reports `None`. Bounds that do not fit `seq` are
/// rejected before any element is read.
pub fn binary_search_recursive<T: Ord>(
    seq: &[T],
    target: &T,
    low: usize,
    high: usize,
) -> Result<Option<usize>, BoundsError> {
    log::trace!("binary_search_recursive: len={} low={low} high={high}", seq.len());

    let bounds = Bounds::checked(low, high, seq.len()).map_err(|e| {
        log::debug!("binary_search_recursive rejected: {e}");
        e
    })?;

    log::trace!("binary_search_recursive: region of {} elements", bounds.len());
    Ok(bounds
        .inclusive()
        .and_then(|(low, high)| search_region(seq, target, low, high)))
}

/// Whole-slice form of [`binary_search_recursive`]. Empty input is `None`.
pub fn binary_search_recursive_slice<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    let (low, high) = Bounds::full(seq.len()).inclusive()?;
    search_region(seq, target, low, high)
}

fn search_region<T: Ord>(seq: &[T], target: &T, low: usize, high: usize) -> Option<usize> {
    if low > high {
        return None;
    }

    let mid = low + (high - low) / 2;
    match seq[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_region(seq, target, mid + 1, high),
        Ordering::Greater => search_region(seq, target, low, mid.checked_sub(1)?),
    }
}
