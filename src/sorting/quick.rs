//! Quick sort with a fixed last-element pivot (Lomuto partition).
//!
//! The fixed pivot makes sorted and reverse-sorted input the O(n^2) worst
//! case. The sort is not stable.

use crate::types::bounds::{Bounds, BoundsError};

/// Sort the inclusive region `[low, high]` of `seq` in place.
///
/// Elements outside the region are not touched. `low >= high` is a no-op,
/// and so is `(0, 0)` on an empty `seq`. Bounds that do not fit `seq` are
/// rejected before anything is moved.
pub fn quick_sort<T: Ord>(seq: &mut [T], low: usize, high: usize) -> Result<(), BoundsError> {
    log::trace!("quick_sort: len={} low={low} high={high}", seq.len());

    let bounds = Bounds::checked(low, high, seq.len()).map_err(|e| {
        log::debug!("quick_sort rejected: {e}");
        e
    })?;

    log::trace!("quick_sort: region of {} elements", bounds.len());
    if let Some((low, high)) = bounds.inclusive() {
        sort_region(seq, low, high);
    }
    Ok(())
}

/// Sort all of `seq` in place. Same as `quick_sort(seq, 0, seq.len() - 1)`.
pub fn quick_sort_slice<T: Ord>(seq: &mut [T]) {
    log::trace!("quick_sort_slice: len={}", seq.len());

    if let Some((low, high)) = Bounds::full(seq.len()).inclusive() {
        sort_region(seq, low, high);
    }
}

// Recurses into the smaller side and loops on the larger one, which keeps
// the stack O(log n) even when the partitions are maximally unbalanced.
fn sort_region<T: Ord>(seq: &mut [T], mut low: usize, mut high: usize) {
    while low < high {
        let pivot = partition(seq, low, high);

        if pivot - low < high - pivot {
            if pivot > low {
                sort_region(seq, low, pivot - 1);
            }
            low = pivot + 1;
        } else {
            if pivot < high {
                sort_region(seq, pivot + 1, high);
            }
            match pivot.checked_sub(1) {
                Some(h) => high = h,
                None => break,
            }
        }
    }
}

/// Partition `[low, high]` around the element at `high`.
///
/// Afterwards every element of `[low, p)` is `<=` the pivot, every element
/// of `(p, high]` is greater, and the pivot sits at the returned index `p`.
///
/// # Panics
///
/// If `low > high` or `high >= seq.len()`.
pub fn partition<T: Ord>(seq: &mut [T], low: usize, high: usize) -> usize {
    assert!(
        low <= high && high < seq.len(),
        "partition region [{low}, {high}] is invalid for length {}",
        seq.len()
    );

    // next slot for an element <= pivot; the pivot stays at `high` during the scan
    let mut store = low;
    for j in low..high {
        if seq[j] <= seq[high] {
            seq.swap(store, j);
            store += 1;
        }
    }

    seq.swap(store, high);
    store
}
