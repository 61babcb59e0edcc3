//! Bucketed match-rate aggregation

/// Percentage of successful samples per fixed-size bucket of hash-sorted
/// samples.
///
/// The sample pairing is reordered by ascending hash value (stable, so equal
/// hashes keep their input order), then walked in runs of `bucket_size`; each
/// full run emits the percentage of its samples whose match count is at
/// least `thresh`. A trailing run shorter than `bucket_size` is dropped.
///
/// Output length is therefore `hashes.len() / bucket_size`, in ascending
/// hash-range order.
pub fn match_percentage_by_bucket(
    hashes: &[f64],
    matches: &[f64],
    thresh: f64,
    bucket_size: usize,
) -> Vec<f64> {
    assert_eq!(
        hashes.len(),
        matches.len(),
        "hash and match arrays must be parallel"
    );
    assert!(bucket_size > 0, "bucket size must be positive");

    // Stable sort permutation of the hash values, applied to both arrays by
    // walking the index order.
    let mut order: Vec<usize> = (0..hashes.len()).collect();
    order.sort_by(|&a, &b| hashes[a].total_cmp(&hashes[b]));

    let mut percentages = Vec::with_capacity(hashes.len() / bucket_size);
    let mut seen = 0usize;
    let mut successes = 0usize;
    for &i in &order {
        seen += 1;
        if matches[i] >= thresh {
            successes += 1;
        }
        if seen == bucket_size {
            debug_assert!(seen > 0);
            percentages.push(100.0 * successes as f64 / seen as f64);
            seen = 0;
            successes = 0;
        }
    }

    percentages
}
