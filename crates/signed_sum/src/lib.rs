use std::fmt;

use anyhow::Result;

/// Answer for one case; `Unreachable` prints as `-1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Answer {
    Operations(u64),
    Unreachable,
}

impl From<Option<u64>> for Answer {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Unreachable, Self::Operations)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operations(count) => write!(f, "{count}"),
            Self::Unreachable => f.write_str("-1"),
        }
    }
}

/// Fewest of `n` slots, each holding a value in `[-p, p]`, whose sum reaches `k`.
///
/// Returns `None` when `k` lies outside `[-n*p, n*p]`.
pub fn min_operations_to_sum(n: u64, k: i64, p: u64) -> Option<u64> {
    let reach = i128::from(n) * i128::from(p);
    let k = i128::from(k);
    if k < -reach || k > reach {
        return None;
    }
    if p == 0 {
        return Some(0);
    }

    let remainder = k.unsigned_abs();
    Some(remainder.div_ceil(u128::from(p)) as u64)
}

/// Input: `t`, then `n k p` per case.
pub fn solve(input: &str) -> Result<String> {
    judge_io::run_cases(input, |tokens| {
        let n: u64 = tokens.next("n")?;
        let k: i64 = tokens.next("k")?;
        let p: u64 = tokens.next("p")?;
        let answer = Answer::from(min_operations_to_sum(n, k, p));
        log::trace!("n={n} k={k} p={p} -> {answer}");
        Ok(answer)
    })
}
