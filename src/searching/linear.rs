/// Index of the first element equal to `target`, scanning front to back.
///
/// Works on unsorted input. Only equality is used, so `T` needs no ordering.
pub fn linear_search<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    log::trace!("linear_search: len={}", seq.len());

    for (i, item) in seq.iter().enumerate() {
        if item == target {
            return Some(i);
        }
    }
    None
}
