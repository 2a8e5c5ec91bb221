mod fenwick;
mod merge;
mod naive;

pub use fenwick::count_inversions_fenwick;
pub use merge::count_inversions_merge;
pub use naive::count_inversions_naive;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InversionCounter {
    Naive,
    MergeSort,
    Fenwick,
}

pub const ALL_COUNTERS: [InversionCounter; 3] = [
    InversionCounter::Naive,
    InversionCounter::MergeSort,
    InversionCounter::Fenwick,
];

impl InversionCounter {
    pub fn label(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::MergeSort => "merge_sort",
            Self::Fenwick => "fenwick",
        }
    }

    #[inline]
    pub fn count(self, values: &[i64]) -> u64 {
        match self {
            Self::Naive => count_inversions_naive(values),
            Self::MergeSort => count_inversions_merge(values),
            Self::Fenwick => count_inversions_fenwick(values),
        }
    }
}

/// Number of pairs `i < j` with `values[i] > values[j]`. Equal values never count.
#[inline]
pub fn count_inversions(values: &[i64]) -> u64 {
    count_inversions_fenwick(values)
}
