use anyhow::{Result, bail, ensure};

pub const DASH: u8 = b'-';
pub const UNDERSCORE: u8 = b'_';

/// `C(dashes, 2) * underscores` for a string of `n` symbols over `{'-', '_'}`.
///
/// `s` is expected to have length `n`; the underscore count is `n` minus the dashes.
pub fn max_subsequences(n: usize, s: &[u8]) -> u128 {
    let dashes = s.iter().filter(|&&c| c == DASH).count() as u64;
    let underscores = (n as u64).saturating_sub(dashes);
    count_from_symbols(dashes, underscores)
}

/// Product in `u128`; the count outgrows `u64` once `n` reaches a few million.
pub fn count_from_symbols(dashes: u64, underscores: u64) -> u128 {
    let dashes = u128::from(dashes);
    dashes * dashes.saturating_sub(1) / 2 * u128::from(underscores)
}

fn check_symbols(n: usize, s: &str) -> Result<()> {
    ensure!(s.len() == n, "string has length {}, expected {n}", s.len());
    if let Some((pos, c)) = s.char_indices().find(|&(_, c)| c != '-' && c != '_') {
        bail!("unexpected symbol {c:?} at position {}", pos + 1);
    }
    Ok(())
}

/// Input: `t`, then `n` and the string per case.
pub fn solve(input: &str) -> Result<String> {
    judge_io::run_cases(input, |tokens| {
        let n: usize = tokens.next("n")?;
        let s = tokens.next_token("s")?;
        check_symbols(n, s)?;
        let count = max_subsequences(n, s.as_bytes());
        log::trace!("n={n} -> {count}");
        Ok(count)
    })
}
