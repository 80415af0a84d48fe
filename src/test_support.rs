//! Deterministic inputs for unit tests.

/// Xorshift samples in `[-range, range]`.
pub(crate) fn samples(count: usize, seed: u64, range: f64) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state as f64 / u64::MAX as f64 * 2.0 - 1.0) * range
        })
        .collect()
}
