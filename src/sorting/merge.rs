/// Return a new ascending `Vec` holding the elements of `seq`.
///
/// `seq` is only borrowed and is left exactly as it was. The slice is split
/// at `len / 2`, each half is sorted recursively, and the halves are
/// combined with [`merge`]. Always O(n log n), and stable.
pub fn merge_sort<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    log::trace!("merge_sort: len={}", seq.len());
    sort_owned(seq)
}

fn sort_owned<T: Ord + Clone>(seq: &[T]) -> Vec<T> {
    if seq.len() <= 1 {
        return seq.to_vec();
    }

    let (left, right) = seq.split_at(seq.len() / 2);
    merge(&sort_owned(left), &sort_owned(right))
}

/// Merge two ascending slices into one ascending `Vec`.
///
/// On ties the element from `left` is taken first.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    debug_assert_eq!(merged.len(), left.len() + right.len());
    merged
}
