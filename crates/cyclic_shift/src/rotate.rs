/// Copy of `values` with the closed range `[l, r]` rotated left by one:
/// `values[l]` moves to `r`, everything in between moves down one slot.
pub fn rotate_range_left(values: &[i64], l: usize, r: usize) -> Vec<i64> {
    let mut shifted = vec![0; values.len()];
    rotate_range_left_into(values, l, r, &mut shifted);
    shifted
}

/// Same as [`rotate_range_left`], writing into a caller-owned buffer of equal length.
#[inline]
pub fn rotate_range_left_into(values: &[i64], l: usize, r: usize, dst: &mut [i64]) {
    debug_assert!(l <= r && r < values.len(), "bad range [{l}, {r}] for len {}", values.len());
    debug_assert_eq!(values.len(), dst.len());

    dst.copy_from_slice(values);
    dst[l..=r].rotate_left(1);
}
