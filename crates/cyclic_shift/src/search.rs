use std::fmt;

use crate::inversions::InversionCounter;
use crate::rotate::rotate_range_left_into;

/// Inclusive, 1-indexed range of a single left rotation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ShiftRange {
    pub left: usize,
    pub right: usize,
}

impl ShiftRange {
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

impl fmt::Display for ShiftRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.right)
    }
}

/// Reported whenever no rotation beats the input as given.
pub const NO_OP_SHIFT: ShiftRange = ShiftRange::new(1, 1);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OptimalShift {
    pub range: ShiftRange,
    pub inversions: u64,
}

pub fn find_optimal_shift(values: &[i64]) -> OptimalShift {
    find_optimal_shift_with(values, InversionCounter::Fenwick)
}

/// Tries every range `[l, r]`, `l` ascending then `r` ascending, and keeps the
/// first one reaching the minimum inversion count.
pub fn find_optimal_shift_with(values: &[i64], counter: InversionCounter) -> OptimalShift {
    let n = values.len();
    let baseline = counter.count(values);
    let mut best = OptimalShift {
        range: NO_OP_SHIFT,
        inversions: baseline,
    };

    let mut shifted = values.to_vec();
    for l in 0..n {
        // r == l leaves the array untouched and can never beat the baseline.
        for r in (l + 1)..n {
            rotate_range_left_into(values, l, r, &mut shifted);
            let inversions = counter.count(&shifted);
            if inversions < best.inversions {
                log::trace!("[{}, {}] lowers inversions to {inversions}", l + 1, r + 1);
                best = OptimalShift {
                    range: ShiftRange::new(l + 1, r + 1),
                    inversions,
                };
            }
        }
    }

    log::debug!(
        "n={n} counter={} baseline={baseline} best={} at {}",
        counter.label(),
        best.inversions,
        best.range
    );
    best
}
