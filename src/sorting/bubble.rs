/// Sort `seq` ascending in place by repeated adjacent swaps.
///
/// Each pass carries the largest remaining element to the end of the active
/// region, which then shrinks by one. A pass without swaps ends the sort, so
/// already sorted input costs a single pass. Equal neighbours are never
/// swapped, which keeps the sort stable.
pub fn bubble_sort<T: Ord>(seq: &mut [T]) {
    log::trace!("bubble_sort: len={}", seq.len());

    // active region is [0, end)
    let mut end = seq.len();
    while end > 1 {
        let mut swapped = false;

        for i in 0..end - 1 {
            if seq[i] > seq[i + 1] {
                seq.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
        end -= 1;
    }
}
