pub fn count_inversions_naive(values: &[i64]) -> u64 {
    let mut count = 0;
    for (i, &a) in values.iter().enumerate() {
        for &b in &values[i + 1..] {
            if a > b {
                count += 1;
            }
        }
    }
    count
}
