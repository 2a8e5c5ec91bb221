/// Binary indexed tree over compressed ranks, counting occurrences.
struct Fenwick {
    tree: Vec<u64>,
}

impl Fenwick {
    fn new(len: usize) -> Self {
        Self {
            tree: vec![0; len + 1],
        }
    }

    fn add_one(&mut self, rank: usize) {
        let mut i = rank + 1;
        while i < self.tree.len() {
            self.tree[i] += 1;
            i += i & i.wrapping_neg();
        }
    }

    /// Count of inserted ranks in `[0, len)`.
    fn prefix_count(&self, len: usize) -> u64 {
        let mut i = len;
        let mut sum = 0;
        while i > 0 {
            sum += self.tree[i];
            i &= i - 1;
        }
        sum
    }
}

pub fn count_inversions_fenwick(values: &[i64]) -> u64 {
    if values.len() < 2 {
        return 0;
    }

    let mut ranks = values.to_vec();
    ranks.sort_unstable();
    ranks.dedup();

    let mut fenwick = Fenwick::new(ranks.len());
    let mut count = 0;
    for (seen, &value) in values.iter().enumerate() {
        let rank = ranks.partition_point(|&x| x < value);
        let not_greater = fenwick.prefix_count(rank + 1);
        count += seen as u64 - not_greater;
        fenwick.add_one(rank);
    }
    count
}
