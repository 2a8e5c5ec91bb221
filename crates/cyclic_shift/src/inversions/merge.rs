const INSERTION_THRESHOLD: usize = 24;

pub fn count_inversions_merge(values: &[i64]) -> u64 {
    let len = values.len();
    if len < 2 {
        return 0;
    }

    let mut data = values.to_vec();
    let mut buf = vec![0; len];
    sort_and_count(&mut data, &mut buf)
}

fn sort_and_count(data: &mut [i64], buf: &mut [i64]) -> u64 {
    let len = data.len();
    if len <= INSERTION_THRESHOLD {
        return insertion_sort_and_count(data);
    }

    let mid = len >> 1;
    let mut count = sort_and_count(&mut data[..mid], &mut buf[..mid]);
    count += sort_and_count(&mut data[mid..], &mut buf[mid..]);

    if data[mid - 1] <= data[mid] {
        return count;
    }

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < len {
        if data[i] <= data[j] {
            buf[k] = data[i];
            i += 1;
        } else {
            // data[j] jumps over every remaining element of the left half.
            buf[k] = data[j];
            j += 1;
            count += (mid - i) as u64;
        }
        k += 1;
    }
    buf[k..k + (mid - i)].copy_from_slice(&data[i..mid]);
    k += mid - i;
    buf[k..len].copy_from_slice(&data[j..len]);
    data.copy_from_slice(&buf[..len]);

    count
}

// Each single-slot shift fixes exactly one inversion.
fn insertion_sort_and_count(data: &mut [i64]) -> u64 {
    let mut count = 0;
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
        count += (i - j) as u64;
    }
    count
}
