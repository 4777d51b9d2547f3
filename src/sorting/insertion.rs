/// Sort `seq` ascending in place by growing a sorted prefix.
///
/// Element `i` moves left past every strictly greater element of the sorted
/// prefix `[0, i)` and stops behind the first one that is `<=` it, so equal
/// elements keep their input order.
pub fn insertion_sort<T: Ord>(seq: &mut [T]) {
    log::trace!("insertion_sort: len={}", seq.len());

    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && seq[j - 1] > seq[i] {
            j -= 1;
        }

        // shift [j, i) right by one and drop element i into slot j
        if j < i {
            seq[j..=i].rotate_right(1);
        }
    }
}
