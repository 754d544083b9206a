/// Shannon entropy of `data` in bits per byte.
///
/// Builds a 256-bin histogram and sums `-p * log2(p)` over the non-empty bins.
/// The result lies in `[0.0, 8.0]`; an empty slice yields `0.0`.
pub fn entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut histogram = [0u64; 256];
    for &byte in data {
        histogram[byte as usize] += 1;
    }

    let len = data.len() as f64;
    let h = histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum::<f64>();

    // Rounding can push a uniform histogram a hair past 8.0.
    h.clamp(0.0, 8.0)
}

/// Entropy above which content is treated as packed or encrypted.
pub const HIGH_ENTROPY_THRESHOLD: f64 = 7.5;

/// True when `value` is strictly above [`HIGH_ENTROPY_THRESHOLD`].
pub fn is_high_entropy(value: f64) -> bool {
    value > HIGH_ENTROPY_THRESHOLD
}
