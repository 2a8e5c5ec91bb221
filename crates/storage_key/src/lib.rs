use std::fmt;

use anyhow::Result;

/// Key printed as space separated values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Key(pub Vec<u64>);

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for value in iter {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}

/// Smallest `k` with `2^k - 1 >= x`, i.e. the bit length of `x`.
#[inline]
pub fn prefix_len(x: u64) -> usize {
    (u64::BITS - x.leading_zeros()) as usize
}

/// `n` values: `0, 1, ..., k-1` followed by copies of `x`, where `k` is
/// [`prefix_len`] of `x` capped at `n`. A single slot always holds `x`.
pub fn create_key(n: usize, x: u64) -> Vec<u64> {
    if n == 1 {
        return vec![x];
    }

    let k = prefix_len(x).min(n);
    let mut key = Vec::with_capacity(n);
    key.extend(0..k as u64);
    key.resize(n, x);
    key
}

/// Input: `t`, then `n x` per case.
pub fn solve(input: &str) -> Result<String> {
    judge_io::run_cases(input, |tokens| {
        let n: usize = tokens.next("n")?;
        let x: u64 = tokens.next("x")?;
        let key = create_key(n, x);
        log::trace!("n={n} x={x} -> prefix of {}", prefix_len(x).min(n));
        Ok(Key(key))
    })
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn prefix_len_is_bit_length() {
        let cases = [(0_u64, 0), (1, 1), (2, 2), (3, 2), (4, 3), (7, 3), (8, 4), (u64::MAX, 64)];
        for (x, expected) in cases {
            assert_eq!(prefix_len(x), expected, "x={x}");
            if expected < 64 {
                assert!((1_u64 << expected) - 1 >= x);
            }
            if expected > 0 {
                assert!((1_u64 << (expected - 1)) - 1 < x);
            }
        }
    }

    #[test]
    fn known_cases() {
        assert_eq!(create_key(1, 7), vec![7]);
        assert_eq!(create_key(1, 0), vec![0]);
        assert_eq!(create_key(5, 3), vec![0, 1, 3, 3, 3]);
        assert_eq!(create_key(4, 0), vec![0, 0, 0, 0]);
        assert_eq!(create_key(3, 4), vec![0, 1, 2]);
        assert_eq!(create_key(2, 1_000_000_000), vec![0, 1]);
        assert_eq!(create_key(0, 5), Vec::<u64>::new());
    }

    #[test]
    fn shape_random() {
        let mut rng = StdRng::seed_from_u64(0xC0DE_0004);
        for _ in 0..500 {
            let n = rng.random_range(2..=40_usize);
            let bits: u32 = rng.random_range(0..40);
            let x = rng.random_range(0..=1_u64 << bits);
            let key = create_key(n, x);
            assert_eq!(key.len(), n);

            let k = prefix_len(x).min(n);
            assert!(key[..k].iter().enumerate().all(|(i, &v)| v == i as u64));
            assert!(key[k..].iter().all(|&v| v == x));
        }
    }

    #[test]
    fn display_joins_with_spaces() {
        assert_eq!(Key(vec![0, 1, 3]).to_string(), "0 1 3");
        assert_eq!(Key(Vec::new()).to_string(), "");
    }

    #[test]
    fn solve_cases() {
        assert_eq!(solve("3\n1 7\n5 3\n3 4\n").unwrap(), "7\n0 1 3 3 3\n0 1 2\n");
    }
}
