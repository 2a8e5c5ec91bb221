mod inversions;
mod rotate;
mod search;

use anyhow::Result;

pub use inversions::{
    ALL_COUNTERS, InversionCounter, count_inversions, count_inversions_fenwick,
    count_inversions_merge, count_inversions_naive,
};
pub use rotate::{rotate_range_left, rotate_range_left_into};
pub use search::{
    NO_OP_SHIFT, OptimalShift, ShiftRange, find_optimal_shift, find_optimal_shift_with,
};

/// Input: `t`, then per case `n` and `n` integers. Output: `l r` per case.
pub fn solve(input: &str) -> Result<String> {
    judge_io::run_cases(input, |tokens| {
        let n: usize = tokens.next("n")?;
        let values: Vec<i64> = tokens.next_vec(n, "a_i")?;
        Ok(find_optimal_shift(&values).range)
    })
}
